// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the chart model, formatter and renderer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("labels and values differ in length ({labels} labels, {values} values)")]
    LengthMismatch { labels: usize, values: usize },

    #[error("set has {got} entries but the chart already holds sets of {expected}")]
    SetSizeMismatch { expected: usize, got: usize },

    #[error("a line set needs at least one point")]
    EmptySet,

    #[error("index {index} out of range 0..={len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("line thickness can't be negative (got {0})")]
    InvalidThickness(f32),

    #[error("dot radius can't be negative (got {0})")]
    InvalidRadius(f32),

    #[error("invalid gradient fill: {0}")]
    InvalidGradient(&'static str),

    #[error("minimum border value {min} must be lower than maximum {max}")]
    InvalidBorders { min: f64, max: f64 },

    #[error("axis step must be positive (got {0})")]
    InvalidStep(f64),

    #[error("invalid label pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
