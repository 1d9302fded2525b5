// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart model, animation and rendering API.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use animation::{Animation, AnimationClock, Easing};
pub use axis::{AxisBorders, ValueAxis};
pub use chart::{ChartLayout, Frame, LineChart, RenderOptions};
pub use error::{ChartError, Result};
pub use format::LabelFormat;
pub use series::{GradientFill, LineSet, Point, Shadow};
pub use text::TextShaper;
pub use theme::Theme;
