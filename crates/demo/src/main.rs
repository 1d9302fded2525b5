// File: crates/demo/src/main.rs
// Summary: Headless demo: activates the line chart screen and writes its enter animation to PNGs.

use anyhow::Result;
use clap::Parser;
use linechart_demo::{init_tracing, Cli, HeadlessHost, LineChartScreen};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::info!(out_dir = %cli.out_dir.display(), theme = %cli.theme, fps = cli.fps, "starting headless host");

    let host = HeadlessHost::from_cli(&cli);
    let written = host.run(&mut LineChartScreen::new())?;
    tracing::info!(files = written.len(), "done");
    Ok(())
}
