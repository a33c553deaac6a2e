// File: crates/stockline-core/src/theme.rs
// Summary: Renderer-agnostic color defaults for chart presentation.

use crate::project::MarkerKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`, for SVG/CSS consumers.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default palette. Collaborating renderers own the final colors; these are
/// the stock choices (open = green tone, close = red tone).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub tick_label: Color,
    pub open: Color,
    pub close: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::rgb(0xff, 0xff, 0xff),
            grid: Color::rgb(0xdd, 0xdd, 0xdd),
            axis_line: Color::rgb(0x00, 0x00, 0x00),
            tick_label: Color::rgb(0x33, 0x33, 0x33),
            open: Color::rgb(0xb2, 0xdf, 0x8a),
            close: Color::rgb(0xe4, 0x1a, 0x1c),
        }
    }

    pub fn series_color(&self, kind: MarkerKind) -> Color {
        match kind {
            MarkerKind::Open => self.open,
            MarkerKind::Close => self.close,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
