// The frame-acquisition boundary. The core never owns camera hardware; it
// consumes aligned frame pairs from whatever implements `FrameSource`.
// A synthetic source is included so the binary runs without a depth camera.

use image::{Luma, Rgb, RgbImage};

use crate::config::TraceConfig;
use crate::error::Error;
use crate::types::IrImage;

/// One aligned frame pair: normalized infrared plus the raw color frame.
pub struct FramePair {
    pub ir: IrImage,
    pub color: RgbImage,
}

/// A device delivering aligned infrared/color pairs at a fixed cadence.
pub trait FrameSource {
    /// Blocks until the next frame pair is available. Any failure here is
    /// fatal to the tick loop; there is no automatic retry.
    fn next_frame(&mut self) -> Result<FramePair, Error>;

    /// Releases capture resources. Called exactly once, after the loop exits.
    fn shutdown(&mut self) -> Result<(), Error>;
}

// ----------------------------- tiny RNG (no external crate) -----------------------------

/// Deterministic xorshift32, good enough for synthetic sensor noise.
#[derive(Clone)]
struct Rng32 {
    state: u32,
}

impl Rng32 {
    fn from_seed(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    #[inline]
    fn next_f32(&mut self) -> f32 {
        // Uniform [0,1)
        (self.next_u32() >> 8) as f32 / ((1u32 << 24) as f32)
    }
}

// ----------------------------- synthetic wand -----------------------------

/// How many ticks of each cycle the synthetic tip spends in frame.
const VISIBLE_TICKS: u64 = 240;
/// Full cycle length; the remainder is spent out of frame so the trail's
/// fade-out path gets exercised.
const CYCLE_TICKS: u64 = 300;

/// Demo source: a saturated dot gliding around the infrared frame over a
/// floor of sensor noise, vanishing for a stretch of every cycle. The color
/// frame is a flat field; the interesting content is painted by the
/// compositor anyway.
pub struct SyntheticWand {
    ir_width: u32,
    ir_height: u32,
    base_color: RgbImage,
    rng: Rng32,
    tick: u64,
}

impl SyntheticWand {
    pub fn new(cfg: &TraceConfig) -> Self {
        Self {
            ir_width: cfg.ir_width,
            ir_height: cfg.ir_height,
            base_color: RgbImage::from_pixel(cfg.color_width, cfg.color_height, Rgb([44, 48, 58])),
            rng: Rng32::from_seed(0x5EED_5EED),
            tick: 0,
        }
    }

    /// Tip path: a slow Lissajous sweep covering most of the frame,
    /// including the swatch column on the right.
    fn tip_position(&self, t: u64) -> (u32, u32) {
        let t = t as f32 * 0.03;
        let h = self.ir_height as f32;
        let w = self.ir_width as f32;
        let row = h * 0.5 + h * 0.38 * (t * 0.7).sin();
        let col = w * 0.5 + w * 0.42 * (t * 1.1).cos();
        (row as u32, col as u32)
    }
}

impl FrameSource for SyntheticWand {
    fn next_frame(&mut self) -> Result<FramePair, Error> {
        let mut ir = IrImage::new(self.ir_width, self.ir_height);
        for px in ir.pixels_mut() {
            *px = Luma([self.rng.next_f32() * 0.25]);
        }

        if self.tick % CYCLE_TICKS < VISIBLE_TICKS {
            let (row, col) = self.tip_position(self.tick);
            // A few saturated pixels, like the real reflective tip blooming.
            for dr in 0..2u32 {
                for dc in 0..2u32 {
                    let r = (row + dr).min(self.ir_height - 1);
                    let c = (col + dc).min(self.ir_width - 1);
                    ir.put_pixel(c, r, Luma([1.0]));
                }
            }
        }

        self.tick += 1;
        Ok(FramePair {
            ir,
            color: self.base_color.clone(),
        })
    }

    fn shutdown(&mut self) -> Result<(), Error> {
        Ok(())
    }
}
