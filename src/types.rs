// Core types shared by the tracking pipeline.

use image::{GrayImage, ImageBuffer, Luma, RgbImage};

/// Normalized infrared intensity image; every sample sits in [0, 1].
/// Visual: bright spots are reflective material; the wand tip saturates near 1.
pub type IrImage = ImageBuffer<Luma<f32>, Vec<f32>>;

/// A pixel position in infrared-image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub row: u32,
    pub col: u32,
}

impl Pos {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// The result of one tip-detection pass. `Absent` carries no position, so
/// "no detection this tick" can never be confused with "last detection".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Present(Pos),
    Absent,
}

/// The three raster outputs of one tick, rebuilt from scratch each time.
/// Visual: these are exactly the three windows on screen.
pub struct TickFrames {
    /// Cropped color image with the swatches and the trail painted in.
    pub color: RgbImage,
    /// Infrared image with saturated markers at every trail position.
    pub ir: IrImage,
    /// Binary mask: 255 at trail positions, 0 everywhere else.
    pub mask: GrayImage,
}
