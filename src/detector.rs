// Tip detection: the wand tip is the brightest pixel in the infrared image,
// but only when it is bright enough to be the reflective material and not
// just background. Visual expectation: with the wand in frame the detection
// sits on the glowing tip; with it out of frame nothing is detected.

use crate::types::{Detection, IrImage, Pos};

/// Find the brightest pixel in a normalized [0, 1] infrared image.
///
/// Returns `Present` at that pixel only when the maximum exceeds
/// `presence_threshold`; anything dimmer is sensor noise or ambient
/// reflection and reports `Absent` with no position at all.
///
/// Ties are common once the sensor saturates, so the winner must be stable:
/// the scan runs in row-major order and keeps the first occurrence of the
/// maximum, i.e. the max-value pixel with the smallest (row, col).
pub fn find_tip(ir: &IrImage, presence_threshold: f32) -> Detection {
    let mut max = f32::NEG_INFINITY;
    let mut at = Pos::new(0, 0);

    // enumerate_pixels walks rows top to bottom, columns left to right;
    // the strict `>` keeps the earliest occurrence on ties.
    for (col, row, px) in ir.enumerate_pixels() {
        let v = px.0[0];
        if v > max {
            max = v;
            at = Pos::new(row, col);
        }
    }

    if max > presence_threshold {
        Detection::Present(at)
    } else {
        Detection::Absent
    }
}
