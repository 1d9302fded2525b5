// File: crates/window-demo/src/main.rs
// Summary: Windowed host: activates the line chart screen and blits each animation frame
// to a winit window through softbuffer.

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{LineChart, RenderOptions};
use clap::Parser;
use linechart_demo::{init_tracing, LineChartScreen, Screen};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Debug, Parser)]
#[command(version, about = "Show the line chart demo screen in a window", long_about = None)]
struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Theme preset: light, dark or high-contrast-dark
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut view = LineChart::new().with_theme(chart_core::theme::find(&cli.theme));
    LineChartScreen::new()
        .on_view_created(&mut view, None)
        .context("screen failed to populate the chart view")?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Line Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(cli.width as f64, cli.height as f64))
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    let mut last_tick: Option<Instant> = None;
    tracing::info!(width = size.width, height = size.height, "window ready");

    let mut draw = move |view: &LineChart, width: u32, height: u32| -> Result<()> {
        let (w, h) = match (NonZeroU32::new(width), NonZeroU32::new(height)) {
            (Some(w), Some(h)) => (w, h),
            // minimized
            _ => return Ok(()),
        };
        surface.resize(w, h).map_err(|e| anyhow!("resize surface: {e}"))?;

        let mut opts = RenderOptions::default();
        opts.width = width as i32;
        opts.height = height as i32;
        let (rgba, _, _, _) = view.render_to_rgba8(&opts)?;

        let mut frame = surface.buffer_mut().map_err(|e| anyhow!("surface buffer: {e}"))?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            // softbuffer wants 0RGB
            *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
        }
        frame.present().map_err(|e| anyhow!("present frame: {e}"))?;
        Ok(())
    };

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    tracing::info!("close requested");
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                if view.is_animating() {
                    let now = Instant::now();
                    let dt = last_tick.map(|t| now - t).unwrap_or_default();
                    last_tick = Some(now);
                    if !view.advance(dt) {
                        tracing::debug!("animation settled");
                    }
                    window.request_redraw();
                    *cf = ControlFlow::Poll;
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&view, size.width, size.height) {
                    tracing::error!("draw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    })
}
