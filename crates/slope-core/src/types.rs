// File: crates/slope-core/src/types.rs
// Summary: Shared types and constants (fallback surface size, margins).

/// Fallback surface width in pixels, used when the host reports no usable size.
pub const WIDTH: i32 = 600;
/// Fallback surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins, in pixels, reserved around the plotting region for
/// endpoint labels and column headers.
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
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // Wide side margins leave room for end-anchored row labels.
        Self::new(100, 100, 30, 30)
    }
}
