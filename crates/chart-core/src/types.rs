// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (surface sizes, paddings, frame rate).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;
/// Default frames per second for hosts driving an animation.
pub const FPS: u32 = 60;

/// Screen margins around the inner chart area, in pixels.
/// Left and bottom leave room for value and category labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(64, 32, 32, 48)
    }
}
