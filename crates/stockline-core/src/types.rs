// File: crates/stockline-core/src/types.rs
// Summary: Shared canvas constants and margin insets.

/// Default drawing surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default drawing surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // 40 px gutter on left/right/bottom for axis lines and tick labels.
        Self::new(40, 40, 0, 40)
    }
}
