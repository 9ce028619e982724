// One object owns all state that survives between ticks: the trail and the
// current cursor color. Each tick is a plain function of (state, frame pair)
// to (state', three output images), which keeps the pipeline testable
// without a camera or a window.

use image::{GrayImage, Rgb, RgbImage};

use crate::compose;
use crate::config::TraceConfig;
use crate::detector;
use crate::error::Error;
use crate::swatch::SwatchPanel;
use crate::trace::TraceBuffer;
use crate::types::{Detection, IrImage, TickFrames};

/// Initial trail color before any swatch has been touched.
pub const INITIAL_CURSOR: Rgb<u8> = Rgb([255, 255, 255]);

pub struct WandSession {
    cfg: TraceConfig,
    panel: SwatchPanel,
    trace: TraceBuffer,
    /// Sticky: changes only on a swatch hit, never resets on a miss.
    cursor_color: Rgb<u8>,
}

impl WandSession {
    pub fn new(cfg: TraceConfig) -> Self {
        let panel = SwatchPanel::new(cfg.ir_width, &cfg.swatches);
        let trace = TraceBuffer::new(cfg.trace_capacity);
        Self {
            cfg,
            panel,
            trace,
            cursor_color: INITIAL_CURSOR,
        }
    }

    /// Run one tick: detect the tip, update the trail, composite the three
    /// output images. Visual: this is everything that changes on screen
    /// from one frame to the next.
    pub fn tick(&mut self, ir: &IrImage, color: &RgbImage) -> Result<TickFrames, Error> {
        self.check_dimensions(ir, color)?;

        let detection = detector::find_tip(ir, self.cfg.presence_threshold);
        self.trace.update(detection);

        // Base color view: aligned crop, then the palette on top.
        let mut color_out = compose::prepare_color(color, &self.cfg);
        compose::paint_swatches(&mut color_out, &self.panel);

        // The tip itself (not the trail) picks the color: hover a swatch
        // and the cursor color switches, leave it and it stays.
        if let Detection::Present(p) = detection {
            let mapped = compose::remap_to_color(p, &self.cfg);
            if let Some(picked) = self.panel.hit(mapped) {
                self.cursor_color = picked;
            }
        }

        // Paint the trail: saturated markers in infrared coordinates, the
        // same squares remapped into the color view in the cursor color.
        let mut ir_out = ir.clone();
        let mut mask = GrayImage::new(self.cfg.ir_width, self.cfg.ir_height);
        let half = self.cfg.marker_half_width;
        for &p in self.trace.iter() {
            compose::stamp_ir_marker(&mut ir_out, p, half);
            compose::stamp_mask_marker(&mut mask, p, half);
            let mapped = compose::remap_to_color(p, &self.cfg);
            compose::stamp_color_marker(&mut color_out, mapped, half, self.cursor_color);
        }

        Ok(TickFrames {
            color: color_out,
            ir: ir_out,
            mask,
        })
    }

    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    pub fn cursor_color(&self) -> Rgb<u8> {
        self.cursor_color
    }

    fn check_dimensions(&self, ir: &IrImage, color: &RgbImage) -> Result<(), Error> {
        if ir.dimensions() != (self.cfg.ir_width, self.cfg.ir_height) {
            return Err(Error::FrameDimensions {
                got_width: ir.width(),
                got_height: ir.height(),
                want_width: self.cfg.ir_width,
                want_height: self.cfg.ir_height,
            });
        }
        if color.dimensions() != (self.cfg.color_width, self.cfg.color_height) {
            return Err(Error::FrameDimensions {
                got_width: color.width(),
                got_height: color.height(),
                want_width: self.cfg.color_width,
                want_height: self.cfg.color_height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swatch;
    use crate::types::Pos;
    use image::Luma;

    fn session() -> WandSession {
        WandSession::new(TraceConfig::default())
    }

    fn blank_color() -> RgbImage {
        RgbImage::new(1920, 1080)
    }

    fn ir_with_tip(pos: Option<Pos>) -> IrImage {
        let mut ir = IrImage::new(512, 424);
        if let Some(p) = pos {
            ir.put_pixel(p.col, p.row, Luma([1.0]));
        }
        ir
    }

    fn trace_positions(s: &WandSession) -> Vec<Pos> {
        s.trace().iter().copied().collect()
    }

    #[test]
    fn five_presents_three_absents_one_duplicate() {
        let mut s = session();
        let color = blank_color();
        let ps: Vec<Pos> = (1..=5).map(|i| Pos::new(10 * i, 10 * i)).collect();

        for &p in &ps {
            s.tick(&ir_with_tip(Some(p)), &color).unwrap();
        }
        assert_eq!(trace_positions(&s), ps);

        for _ in 0..3 {
            s.tick(&ir_with_tip(None), &color).unwrap();
        }
        assert_eq!(trace_positions(&s), vec![ps[3], ps[4]]);

        s.tick(&ir_with_tip(Some(ps[4])), &color).unwrap();
        assert_eq!(trace_positions(&s), vec![ps[3], ps[4]]);
    }

    #[test]
    fn cursor_color_starts_white_and_sticks_after_a_hit() {
        let mut s = session();
        let color = blank_color();
        assert_eq!(s.cursor_color(), INITIAL_CURSOR);

        // (80, 440) in infrared space remaps to (85, 460), inside the red
        // box at rows 68..118, cols 454..504.
        let over_red = Pos::new(80, 440);
        s.tick(&ir_with_tip(Some(over_red)), &color).unwrap();
        assert_eq!(s.cursor_color(), swatch::RED);

        // Away from every swatch: the selection must not reset.
        s.tick(&ir_with_tip(Some(Pos::new(300, 100))), &color).unwrap();
        assert_eq!(s.cursor_color(), swatch::RED);
        s.tick(&ir_with_tip(None), &color).unwrap();
        assert_eq!(s.cursor_color(), swatch::RED);
    }

    #[test]
    fn trail_markers_land_in_all_three_outputs() {
        let mut s = session();
        let color = blank_color();
        let p = Pos::new(200, 100);
        let frames = s.tick(&ir_with_tip(Some(p)), &color).unwrap();

        assert_eq!(frames.ir.get_pixel(100, 200).0[0], 1.0);
        assert_eq!(frames.mask.get_pixel(100, 200).0[0], 255);
        // Color marker sits at the calibration-offset position, in white.
        assert_eq!(*frames.color.get_pixel(120, 205), INITIAL_CURSOR);
    }

    #[test]
    fn corner_tip_never_writes_out_of_bounds() {
        let mut s = session();
        let color = blank_color();
        // Bottom-right corner of the infrared frame.
        let frames = s
            .tick(&ir_with_tip(Some(Pos::new(423, 511))), &color)
            .unwrap();
        assert_eq!(frames.mask.dimensions(), (512, 424));
        assert_eq!(frames.mask.get_pixel(511, 423).0[0], 255);
    }

    #[test]
    fn mismatched_infrared_frame_is_rejected() {
        let mut s = session();
        let bad = IrImage::new(100, 100);
        assert!(s.tick(&bad, &blank_color()).is_err());
    }

    #[test]
    fn outputs_carry_no_state_between_ticks() {
        let mut s = session();
        let color = blank_color();
        s.tick(&ir_with_tip(Some(Pos::new(200, 100))), &color).unwrap();

        // Drain the single trail point; the next mask must be empty again.
        let frames = s.tick(&ir_with_tip(None), &color).unwrap();
        assert!(frames.mask.pixels().all(|px| px.0[0] == 0));
    }
}
