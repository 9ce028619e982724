// All tuned values in one place. The defaults reproduce the calibration the
// trail was tuned against; change them here rather than in the pipeline code.

/// Placement of the four color swatches inside the working color image.
/// Visual: a vertical stack of boxes hugging the right edge of the frame.
#[derive(Debug, Clone)]
pub struct SwatchLayout {
    /// Row the stack of boxes is centered on.
    pub vertical_center: u32,
    /// Side length of each square box, in pixels.
    pub box_size: u32,
    /// Blank pixels between adjacent boxes, and between the stack and the
    /// right edge of the frame.
    pub gap: u32,
}

impl Default for SwatchLayout {
    fn default() -> Self {
        Self {
            vertical_center: 180,
            box_size: 50,
            gap: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Infrared frame size delivered by the depth camera.
    pub ir_width: u32,
    pub ir_height: u32,
    /// Raw color frame size delivered by the color camera.
    pub color_width: u32,
    pub color_height: u32,
    /// The tip counts as present only when the brightest infrared sample
    /// exceeds this. Keeps ordinary reflections and sensor noise out.
    pub presence_threshold: f32,
    /// Upper bound on how many positions the trail remembers.
    pub trace_capacity: usize,
    /// Half-width of the filled square painted at each trail position.
    pub marker_half_width: u32,
    /// Calibration offset applied when painting infrared-space positions
    /// onto the color image. Compensates for residual misalignment between
    /// the two sensors' optical axes; retune per rig, never derive.
    pub color_row_offset: i64,
    pub color_col_offset: i64,
    /// The raw color frame is shrunk by this factor before cropping.
    pub color_downscale: u32,
    /// First column kept when cropping the shrunk color frame to `ir_width`.
    pub crop_col_start: u32,
    /// Blank rows added above and below the crop so its height matches
    /// `ir_height`.
    pub pad_rows: u32,
    pub swatches: SwatchLayout,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            ir_width: 512,
            ir_height: 424,
            color_width: 1920,
            color_height: 1080,
            presence_threshold: 0.99,
            trace_capacity: 100,
            marker_half_width: 3,
            color_row_offset: 5,
            color_col_offset: 20,
            color_downscale: 3,
            crop_col_start: 64,
            pad_rows: 32,
            swatches: SwatchLayout::default(),
        }
    }
}
