// The color picker: four fixed boxes painted into the color image. Hovering
// the wand tip over a box switches the trail to that box's color.

use image::Rgb;

use crate::config::SwatchLayout;
use crate::types::Pos;

/// Axis-aligned rectangle in color-image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= self.top
            && pos.row < self.top + self.height
            && pos.col >= self.left
            && pos.col < self.left + self.width
    }
}

/// One named color region.
#[derive(Debug, Clone, Copy)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Rgb<u8>,
    pub rect: Rect,
}

/// The fixed set of swatches, in hit-test priority order. Built once at
/// startup and never mutated afterwards.
pub struct SwatchPanel {
    swatches: Vec<Swatch>,
}

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);
pub const PURPLE: Rgb<u8> = Rgb([120, 20, 255]);

impl SwatchPanel {
    /// Lay out the four boxes in one column near the right edge of a frame
    /// `frame_width` wide: red, blue, yellow, purple from top to bottom,
    /// centered vertically on the layout's center row with a fixed gap
    /// between boxes. Visual: a small palette strip along the right edge.
    pub fn new(frame_width: u32, layout: &SwatchLayout) -> Self {
        let b = layout.box_size;
        let g = layout.gap;
        let col = frame_width - g - b;
        let center = layout.vertical_center;

        // Two boxes above the center row, two below, `gap` apart.
        let rows = [
            center - g / 2 - b - g - b,
            center - g / 2 - b,
            center + g / 2,
            center + g / 2 + b + g,
        ];
        let named: [(&'static str, Rgb<u8>); 4] = [
            ("red", RED),
            ("blue", BLUE),
            ("yellow", YELLOW),
            ("purple", PURPLE),
        ];

        let swatches = named
            .iter()
            .zip(rows)
            .map(|(&(name, color), top)| Swatch {
                name,
                color,
                rect: Rect {
                    top,
                    left: col,
                    width: b,
                    height: b,
                },
            })
            .collect();

        Self { swatches }
    }

    /// Custom geometry, still hit-tested in the given order.
    pub fn with_swatches(swatches: Vec<Swatch>) -> Self {
        Self { swatches }
    }

    /// Resolve a position (already in color-image coordinates) to the color
    /// of the first swatch containing it. The boxes do not overlap by
    /// design; should a custom layout overlap, declaration order wins.
    pub fn hit(&self, pos: Pos) -> Option<Rgb<u8>> {
        self.swatches
            .iter()
            .find(|sw| sw.rect.contains(pos))
            .map(|sw| sw.color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Swatch> {
        self.swatches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SwatchLayout;

    fn default_panel() -> SwatchPanel {
        SwatchPanel::new(512, &SwatchLayout::default())
    }

    #[test]
    fn default_layout_stacks_four_boxes_in_one_column() {
        let panel = default_panel();
        let rects: Vec<Rect> = panel.iter().map(|sw| sw.rect).collect();
        assert_eq!(rects.len(), 4);

        for r in &rects {
            assert_eq!(r.left, 454);
            assert_eq!(r.width, 50);
            assert_eq!(r.height, 50);
        }
        assert_eq!(rects[0].top, 68);
        assert_eq!(rects[1].top, 126);
        assert_eq!(rects[2].top, 184);
        assert_eq!(rects[3].top, 242);

        // A constant gap separates consecutive boxes.
        for pair in rects.windows(2) {
            assert_eq!(pair[1].top - (pair[0].top + pair[0].height), 8);
        }
    }

    #[test]
    fn hit_returns_the_containing_swatch_color() {
        let panel = default_panel();
        assert_eq!(panel.hit(Pos::new(70, 460)), Some(RED));
        assert_eq!(panel.hit(Pos::new(130, 460)), Some(BLUE));
        assert_eq!(panel.hit(Pos::new(200, 460)), Some(YELLOW));
        assert_eq!(panel.hit(Pos::new(250, 460)), Some(PURPLE));
    }

    #[test]
    fn miss_returns_none() {
        let panel = default_panel();
        assert_eq!(panel.hit(Pos::new(0, 0)), None);
        // Just outside the red box on every side.
        assert_eq!(panel.hit(Pos::new(67, 460)), None);
        assert_eq!(panel.hit(Pos::new(118, 460)), None);
        assert_eq!(panel.hit(Pos::new(70, 453)), None);
        assert_eq!(panel.hit(Pos::new(70, 504)), None);
    }

    #[test]
    fn overlapping_swatches_resolve_in_declaration_order() {
        let rect = Rect {
            top: 10,
            left: 10,
            width: 20,
            height: 20,
        };
        let panel = SwatchPanel::with_swatches(vec![
            Swatch {
                name: "red",
                color: RED,
                rect,
            },
            Swatch {
                name: "blue",
                color: BLUE,
                rect,
            },
        ]);
        assert_eq!(panel.hit(Pos::new(15, 15)), Some(RED));
    }
}
