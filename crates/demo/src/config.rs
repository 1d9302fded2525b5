// File: crates/demo/src/config.rs
// Summary: Command line options for the headless host and tracing setup shared by the binaries.

use std::path::PathBuf;
use std::time::Duration;

use chart_core::types::{FPS, HEIGHT, WIDTH};
use chart_core::{RenderOptions, Theme};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Render the line chart demo screen to PNG frames", long_about = None)]
pub struct Cli {
    /// Directory the frames and the settled chart are written to
    #[arg(long, default_value = "target/out")]
    pub out_dir: PathBuf,

    /// Surface width in pixels
    #[arg(long, default_value_t = WIDTH)]
    pub width: i32,

    /// Surface height in pixels
    #[arg(long, default_value_t = HEIGHT)]
    pub height: i32,

    /// Frames per second used to step the animation
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Theme preset: light, dark or high-contrast-dark
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Skip axis labels (font independent output)
    #[arg(long)]
    pub no_labels: bool,

    /// Only write the settled chart, not every animation frame
    #[arg(long)]
    pub final_only: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("target/out"),
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
            theme: "light".to_string(),
            no_labels: false,
            final_only: false,
        }
    }
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::default();
        opts.width = self.width;
        opts.height = self.height;
        opts.draw_labels = !self.no_labels;
        opts
    }

    pub fn theme(&self) -> Theme {
        chart_core::theme::find(&self.theme)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

/// Install a fmt subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from(["linechart-demo", "--width", "320", "--fps", "30", "--theme", "dark", "--no-labels"]);
        let opts = cli.render_options();
        assert_eq!(opts.width, 320);
        assert_eq!(opts.height, HEIGHT);
        assert!(!opts.draw_labels);
        assert_eq!(cli.theme().name, "dark");
        assert_eq!(cli.frame_interval(), Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn rejects_zero_fps() {
        assert!(Cli::try_parse_from(["linechart-demo", "--fps", "0"]).is_err());
    }
}
