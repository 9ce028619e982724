// Software compositing: aligning the raw color frame with the infrared
// frame, painting the swatch palette, and stamping the trail markers.
// Every pixel write in here is clamped; nothing may index out of range.

use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage, imageops};

use crate::config::TraceConfig;
use crate::swatch::SwatchPanel;
use crate::types::{IrImage, Pos};

/// Build the working color image the rest of the tick paints into.
///
/// The raw color frame is larger and wider-angled than the infrared frame,
/// so: downscale by the configured factor, crop a window as wide as the
/// infrared frame, then pad blank rows above and below until the heights
/// match. Visual: the color view lines up with the infrared view, with
/// black bars at the top and bottom.
///
/// Swatch coordinates and trail offsets are defined relative to this image,
/// so the three steps must not be reordered or retuned independently.
pub fn prepare_color(raw: &RgbImage, cfg: &TraceConfig) -> RgbImage {
    let scaled_w = raw.width() / cfg.color_downscale;
    let scaled_h = raw.height() / cfg.color_downscale;
    let scaled = imageops::resize(raw, scaled_w, scaled_h, imageops::FilterType::Triangle);

    let crop =
        imageops::crop_imm(&scaled, cfg.crop_col_start, 0, cfg.ir_width, scaled_h).to_image();

    // Fresh black canvas at infrared height; the crop sits between the bars.
    let mut out = RgbImage::new(cfg.ir_width, cfg.ir_height);
    imageops::replace(&mut out, &crop, 0, i64::from(cfg.pad_rows));
    out
}

/// Paint every swatch as a filled box. Visual: the palette strip appears.
pub fn paint_swatches(img: &mut RgbImage, panel: &SwatchPanel) {
    for sw in panel.iter() {
        let right = (sw.rect.left + sw.rect.width).min(img.width());
        let bottom = (sw.rect.top + sw.rect.height).min(img.height());
        for row in sw.rect.top.min(img.height())..bottom {
            for col in sw.rect.left.min(img.width())..right {
                img.put_pixel(col, row, sw.color);
            }
        }
    }
}

/// Map an infrared-space position into the working color image by the
/// calibration offset, clamped to the target bounds.
pub fn remap_to_color(pos: Pos, cfg: &TraceConfig) -> Pos {
    let row = (i64::from(pos.row) + cfg.color_row_offset)
        .clamp(0, i64::from(cfg.ir_height) - 1) as u32;
    let col = (i64::from(pos.col) + cfg.color_col_offset)
        .clamp(0, i64::from(cfg.ir_width) - 1) as u32;
    Pos::new(row, col)
}

/// Stamp a filled square of the given half-width centered on `center`.
/// Coordinates falling outside the image are clamped to the nearest edge
/// pixel, so a marker near a corner flattens against it instead of faulting.
pub fn stamp_square<P>(
    img: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    center: Pos,
    half_width: u32,
    value: P,
) where
    P: Pixel,
{
    let h = i64::from(img.height());
    let w = i64::from(img.width());
    let half = i64::from(half_width);

    for dr in -half..=half {
        for dc in -half..=half {
            let row = (i64::from(center.row) + dr).clamp(0, h - 1) as u32;
            let col = (i64::from(center.col) + dc).clamp(0, w - 1) as u32;
            img.put_pixel(col, row, value);
        }
    }
}

/// Saturated marker in the infrared view.
pub fn stamp_ir_marker(img: &mut IrImage, center: Pos, half_width: u32) {
    stamp_square(img, center, half_width, Luma([1.0f32]));
}

/// Saturated marker in the binary mask.
pub fn stamp_mask_marker(img: &mut GrayImage, center: Pos, half_width: u32) {
    stamp_square(img, center, half_width, Luma([255u8]));
}

/// Trail marker in the working color image, in the current cursor color.
pub fn stamp_color_marker(img: &mut RgbImage, center: Pos, half_width: u32, color: Rgb<u8>) {
    stamp_square(img, center, half_width, color);
}
