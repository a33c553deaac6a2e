// File: crates/stockline-core/src/geometry.rs
// Summary: Plot-region pixel bounds.

use crate::types::{Insets, HEIGHT, WIDTH};

/// Pixel bounds of the plotting region, interior margins already subtracted.
/// `y0` is the top edge; screen Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub x0: f32,
    pub x1: f32,
    pub y0: f32,
    pub y1: f32,
}

impl PlotRect {
    pub const fn from_ltrb(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, x1, y0, y1 }
    }

    /// Plot region of a canvas after subtracting the margin insets.
    pub fn from_canvas(width: i32, height: i32, insets: Insets) -> Self {
        Self {
            x0: insets.left as f32,
            x1: (width - insets.right as i32) as f32,
            y0: insets.top as f32,
            y1: (height - insets.bottom as i32) as f32,
        }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }
}

impl Default for PlotRect {
    fn default() -> Self {
        Self::from_canvas(WIDTH, HEIGHT, Insets::default())
    }
}
