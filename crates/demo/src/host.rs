// File: crates/demo/src/host.rs
// Summary: Headless host: creates a chart view, activates a screen, then steps the animation
// clock and writes each frame as a PNG.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chart_core::{LineChart, RenderOptions, Theme};

use crate::config::Cli;
use crate::screen::{SavedState, Screen};

/// Frames written before giving up on an animation that never settles.
const MAX_FRAMES: usize = 10_000;

pub struct HeadlessHost {
    pub opts: RenderOptions,
    pub theme: Theme,
    pub frame_interval: Duration,
    pub out_dir: PathBuf,
    pub final_only: bool,
}

impl HeadlessHost {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            opts: cli.render_options(),
            theme: cli.theme(),
            frame_interval: cli.frame_interval(),
            out_dir: cli.out_dir.clone(),
            final_only: cli.final_only,
        }
    }

    /// Fresh view with the host theme, already populated by `screen`.
    pub fn activate(&self, screen: &mut dyn Screen, saved_state: Option<&SavedState>) -> Result<LineChart> {
        let mut view = LineChart::new().with_theme(self.theme);
        screen
            .on_view_created(&mut view, saved_state)
            .context("screen failed to populate the chart view")?;
        Ok(view)
    }

    /// Activate `screen` and play its animation to the end.
    /// Returns the written files; the settled chart is always last.
    pub fn run(&self, screen: &mut dyn Screen) -> Result<Vec<PathBuf>> {
        let mut view = self.activate(screen, None)?;
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating output directory {}", self.out_dir.display()))?;

        let mut written = Vec::new();
        let mut frames = 0usize;
        loop {
            if !self.final_only {
                let path = self.out_dir.join(format!("linechart_frame_{frames:03}.png"));
                self.write(&view, &path)?;
                written.push(path);
            }
            frames += 1;
            if !view.advance(self.frame_interval) {
                break;
            }
            if frames >= MAX_FRAMES {
                tracing::warn!(frames, "animation did not settle, stopping");
                break;
            }
        }
        tracing::debug!(frames, "animation settled");

        let settled = self.out_dir.join("linechart.png");
        self.write(&view, &settled)?;
        tracing::info!("Wrote {}", settled.display());
        written.push(settled);
        Ok(written)
    }

    fn write(&self, view: &LineChart, path: &Path) -> Result<()> {
        view.render_to_png(&self.opts, path)
            .with_context(|| format!("rendering {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}
