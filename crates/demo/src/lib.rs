// File: crates/demo/src/lib.rs
// Summary: Line chart demo screen, host lifecycle trait and the headless host.

pub mod config;
pub mod host;
pub mod screen;

pub use config::{init_tracing, Cli};
pub use host::HeadlessHost;
pub use screen::{LineChartScreen, SavedState, Screen, SAMPLE_POINTS};
