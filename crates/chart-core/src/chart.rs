// File: crates/chart-core/src/chart.rs
// Summary: LineChart widget: data, label format, enter animation, layout and headless rendering
// using Skia CPU raster surfaces.

use std::path::Path;
use std::time::Duration;

use skia_safe as skia;

use crate::animation::{lerp, Animation, AnimationClock};
use crate::axis::{category_labels, AxisBorders, ValueAxis};
use crate::error::{ChartError, Result};
use crate::format::LabelFormat;
use crate::geometry::RectF;
use crate::scale::{CategoryScale, ValueScale};
use crate::series::{GradientFill, LineSet};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Control-point distance for smooth lines, as a fraction of the neighbour span.
const SMOOTH_FACTOR: f32 = 0.15;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub draw_labels: bool,
    pub label_size: f32,
    /// Gap between the inner chart edges and the first/last category.
    pub border_spacing: f32,
    /// Gap between the top of the inner chart and the highest tick.
    pub top_spacing: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
            label_size: 14.0,
            border_spacing: 24.0,
            top_spacing: 8.0,
        }
    }
}

/// Resolved pixel geometry of the settled (fully shown) chart.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub inner: RectF,
    pub x_labels: Vec<String>,
    pub x_positions: Vec<f32>,
    pub value_axis: ValueAxis,
    pub y_positions: Vec<f32>,
    /// Target (x, y) of every point, per set.
    pub points: Vec<Vec<(f32, f32)>>,
    /// Where entering points start from.
    pub baseline_px: f32,
}

/// One animation frame: eased point positions and set alpha.
#[derive(Clone, Debug)]
pub struct Frame {
    pub progress: f64,
    pub alpha: f32,
    pub sets: Vec<Vec<(f32, f32)>>,
}

#[derive(Clone, Debug, Default)]
pub struct LineChart {
    data: Vec<LineSet>,
    labels_format: LabelFormat,
    borders: AxisBorders,
    theme: Theme,
    clock: Option<AnimationClock>,
}

impl LineChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn data(&self) -> &[LineSet] { &self.data }
    pub fn labels_format(&self) -> &LabelFormat { &self.labels_format }

    /// Add a set. Every set must have as many points as the ones already added.
    pub fn add_data(&mut self, set: LineSet) -> Result<()> {
        if set.is_empty() {
            return Err(ChartError::EmptySet);
        }
        if let Some(first) = self.data.first() {
            if first.len() != set.len() {
                return Err(ChartError::SetSizeMismatch { expected: first.len(), got: set.len() });
            }
        }
        tracing::debug!(points = set.len(), sets = self.data.len() + 1, "added line set");
        self.data.push(set);
        Ok(())
    }

    pub fn set_labels_format(&mut self, format: LabelFormat) -> &mut Self {
        self.labels_format = format;
        self
    }

    pub fn set_axis_border_values(&mut self, min: f64, max: f64, step: Option<f64>) -> Result<&mut Self> {
        self.borders = AxisBorders::new(min, max, step)?;
        Ok(self)
    }

    pub fn set_axis_step(&mut self, step: f64) -> Result<&mut Self> {
        self.borders = AxisBorders::with_step(step)?;
        Ok(self)
    }

    /// Show every set at its final position.
    pub fn show(&mut self) {
        for set in &mut self.data {
            set.visible = true;
        }
        self.clock = None;
    }

    /// Show every set, entering with `animation`. The host advances the clock.
    pub fn show_with(&mut self, animation: Animation) {
        self.show();
        tracing::debug!(
            duration_ms = animation.duration.as_millis() as u64,
            easing = ?animation.easing,
            "starting enter animation"
        );
        self.clock = Some(AnimationClock::start(animation));
    }

    /// Step the running animation; returns true while more frames are due.
    pub fn advance(&mut self, dt: Duration) -> bool {
        match &mut self.clock {
            Some(clock) => clock.advance(dt),
            None => false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.clock.as_ref().is_some_and(|c| !c.is_finished())
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.clock.as_ref().map(|c| &c.animation)
    }

    pub fn layout(&self, opts: &RenderOptions) -> ChartLayout {
        let inner = RectF::inset(opts.width, opts.height, &opts.insets);
        let value_axis = ValueAxis::resolve(&self.data, &self.borders, &self.labels_format);
        let top_tick = value_axis.values.last().copied().unwrap_or(value_axis.max).max(value_axis.max);
        let top_px = (inner.top + opts.top_spacing).min(inner.bottom);
        let vscale = ValueScale::new_linear(top_px, inner.bottom, value_axis.min, top_tick);
        let y_positions = value_axis.values.iter().map(|v| vscale.to_px(*v)).collect();

        let x_labels = category_labels(&self.data);
        let xscale = CategoryScale::new(inner.left, inner.right, opts.border_spacing, x_labels.len());
        let x_positions = xscale.positions();

        let points = self
            .data
            .iter()
            .map(|set| {
                set.points()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (xscale.to_px(i), vscale.to_px(p.value)))
                    .collect()
            })
            .collect();

        ChartLayout {
            inner,
            x_labels,
            x_positions,
            value_axis,
            y_positions,
            points,
            baseline_px: inner.bottom,
        }
    }

    /// Current frame. Without a running animation every point sits at its target.
    pub fn frame(&self, layout: &ChartLayout) -> Frame {
        let (progress, alpha) = match &self.clock {
            Some(c) => (c.progress(), c.alpha()),
            None => (1.0, 1.0),
        };
        let sets = layout
            .points
            .iter()
            .map(|pts| pts.iter().map(|&(x, y)| (x, lerp(layout.baseline_px, y, progress))).collect())
            .collect();
        Frame { progress, alpha, sets }
    }

    /// Render the current frame to an RGBA8 (unpremultiplied) buffer.
    /// Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (opts.width, opts.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or(ChartError::Surface { width: w, height: h })?;

        let layout = self.layout(opts);
        let frame = self.frame(&layout);
        self.draw(surface.canvas(), opts, &layout, &frame);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w as u32, h as u32, pixels).ok_or(ChartError::ReadPixels)?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the current frame to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, layout: &ChartLayout, frame: &Frame) {
        canvas.clear(self.theme.background);
        draw_grid(canvas, layout, &self.theme);
        draw_axes(canvas, layout, &self.theme);
        if opts.draw_labels {
            draw_labels(canvas, layout, &self.theme, opts.label_size);
        }
        for (set, pts) in self.data.iter().zip(&frame.sets) {
            if set.visible {
                draw_line_set(canvas, layout, set, pts, frame.alpha);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    color.with_a((color.a() as f32 * alpha.clamp(0.0, 1.0)).round() as u8)
}

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let r = &layout.inner;
    for &y in &layout.y_positions {
        canvas.draw_line((r.left, y), (r.right, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    let r = &layout.inner;
    canvas.draw_line((r.left, r.bottom), (r.right, r.bottom), &axis_paint);
    canvas.draw_line((r.left, r.top), (r.left, r.bottom), &axis_paint);
}

fn draw_labels(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme, size: f32) {
    let shaper = TextShaper::new();
    let r = &layout.inner;
    for (label, &y) in layout.value_axis.labels.iter().zip(&layout.y_positions) {
        shaper.draw_right(canvas, label, r.left - 8.0, y + size * 0.35, size, theme.axis_label);
    }
    for (label, &x) in layout.x_labels.iter().zip(&layout.x_positions) {
        shaper.draw_centered(canvas, label, x, r.bottom + size + 8.0, size, theme.axis_label);
    }
}

fn draw_line_set(canvas: &skia::Canvas, layout: &ChartLayout, set: &LineSet, pts: &[(f32, f32)], alpha: f32) {
    let (begin, end) = (set.begin(), set.end().min(pts.len()));
    if begin >= end {
        return;
    }
    let mut builder = if set.smooth { smooth_path(pts, begin, end) } else { line_path(pts, begin, end) };
    let path = builder.snapshot();

    if set.fill.is_some() || set.gradient_fill.is_some() {
        let bottom = layout.inner.bottom;
        builder.line_to((pts[end - 1].0, bottom)).line_to((pts[begin].0, bottom)).close();
        let area = builder.detach();

        let mut fill_paint = skia::Paint::default();
        fill_paint.set_anti_alias(true);
        fill_paint.set_style(skia::paint::Style::Fill);
        let ready = match (&set.gradient_fill, set.fill) {
            (Some(gradient), _) => match gradient_shader(gradient, &layout.inner) {
                Some(shader) => {
                    fill_paint.set_shader(shader);
                    fill_paint.set_alpha_f(alpha);
                    true
                }
                None => {
                    tracing::warn!("gradient fill could not be built, skipping");
                    false
                }
            },
            (None, Some(fill)) => {
                fill_paint.set_color(with_alpha(fill, alpha));
                true
            }
            (None, None) => false,
        };
        if ready {
            canvas.draw_path(&area, &fill_paint);
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(set.thickness);
    stroke.set_color(with_alpha(set.color, alpha));
    if let Some(intervals) = &set.dashed {
        stroke.set_path_effect(skia::PathEffect::dash(intervals, 0.0));
    }
    if let Some(shadow) = &set.shadow {
        let sigma = blur_sigma(shadow.radius);
        stroke.set_image_filter(skia::image_filters::drop_shadow(
            (shadow.dx, shadow.dy),
            (sigma, sigma),
            with_alpha(shadow.color, alpha),
            None,
            None,
            skia::image_filters::CropRect::default(),
        ));
    }
    canvas.draw_path(&path, &stroke);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    for (p, &(x, y)) in set.points()[begin..end].iter().zip(&pts[begin..end]) {
        if !p.visible {
            continue;
        }
        dot.set_style(skia::paint::Style::Fill);
        dot.set_color(with_alpha(p.color, alpha));
        canvas.draw_circle((x, y), p.radius, &dot);
        if let Some((thickness, color)) = p.stroke {
            dot.set_style(skia::paint::Style::Stroke);
            dot.set_stroke_width(thickness);
            dot.set_color(with_alpha(color, alpha));
            canvas.draw_circle((x, y), p.radius, &dot);
        }
    }
}

/// Vertical gradient from the inner chart top to its bottom, mirrored beyond.
fn gradient_shader(gradient: &GradientFill, inner: &RectF) -> Option<skia::Shader> {
    use skia::gradient::{shaders, Colors, Gradient, Interpolation};

    let colors: Vec<skia::Color4f> = gradient.colors.iter().map(|c| skia::Color4f::from(*c)).collect();
    let stops = Colors::new(&colors, gradient.positions.as_deref(), skia::TileMode::Mirror, None);
    shaders::linear_gradient(
        ((inner.left, inner.top), (inner.left, inner.bottom)),
        &Gradient::new(stops, Interpolation::default()),
        None,
    )
}

/// Blur radius in pixels to a Gaussian sigma.
fn blur_sigma(radius: f32) -> f32 {
    if radius > 0.0 { 0.57735 * radius + 0.5 } else { 0.0 }
}

/// Straight segments through `pts[begin..end]`.
pub(crate) fn line_path(pts: &[(f32, f32)], begin: usize, end: usize) -> skia::PathBuilder {
    let mut path = skia::PathBuilder::new();
    let end = end.min(pts.len());
    if begin < end {
        path.move_to(pts[begin]);
        for &p in &pts[begin + 1..end] {
            path.line_to(p);
        }
    }
    path
}

/// Cubic path through `pts[begin..end]`. Control points follow the slope
/// between each point's neighbours, which may lie outside the window.
pub(crate) fn smooth_path(pts: &[(f32, f32)], begin: usize, end: usize) -> skia::PathBuilder {
    let mut path = skia::PathBuilder::new();
    let end = end.min(pts.len());
    if begin >= end {
        return path;
    }
    path.move_to(pts[begin]);

    let last = pts.len() as isize - 1;
    let at = |i: isize| pts[i.clamp(0, last) as usize];
    for i in begin as isize..end as isize - 1 {
        let (x, y) = at(i);
        let (nx, ny) = at(i + 1);
        let (px, py) = at(i - 1);
        let (ax, ay) = at(i + 2);
        let c1 = (x + SMOOTH_FACTOR * (nx - px), y + SMOOTH_FACTOR * (ny - py));
        let c2 = (nx - SMOOTH_FACTOR * (ax - x), ny - SMOOTH_FACTOR * (ay - y));
        path.cubic_to(c1, c2, (nx, ny));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::LineSet;
    use approx::assert_abs_diff_eq;

    fn chart() -> LineChart {
        let mut chart = LineChart::new();
        chart
            .add_data(LineSet::new(&["a", "b", "c"], &[1.0, 3.0, 2.0]).unwrap())
            .unwrap();
        chart
    }

    #[test]
    fn sets_must_match_in_size() {
        let mut c = chart();
        let err = c.add_data(LineSet::new(&["a"], &[1.0]).unwrap()).unwrap_err();
        assert!(matches!(err, ChartError::SetSizeMismatch { expected: 3, got: 1 }));
        assert!(matches!(c.add_data(LineSet::default()), Err(ChartError::EmptySet)));
    }

    #[test]
    fn sets_stay_hidden_until_shown() {
        let mut c = chart();
        assert!(!c.data()[0].visible);
        c.show();
        assert!(c.data()[0].visible);
        assert!(!c.is_animating());
    }

    #[test]
    fn path_point_counts() {
        let pts = [(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.0)];
        assert_eq!(line_path(&pts, 0, 4).snapshot().count_points(), 4);
        // move + 3 cubics of 3 points each
        assert_eq!(smooth_path(&pts, 0, 4).snapshot().count_points(), 10);
        assert_eq!(line_path(&[], 0, 0).snapshot().count_points(), 0);
        assert_eq!(line_path(&pts, 1, 3).snapshot().count_points(), 2);
    }

    #[test]
    fn smooth_window_uses_neighbours_outside_it() {
        let pts = [(0.0, 0.0), (10.0, 20.0), (20.0, 10.0), (30.0, 30.0)];
        let path = smooth_path(&pts, 1, 3).snapshot();
        let p = path.points();
        // move to pts[1], one cubic to pts[2]
        assert_eq!(p.len(), 4);
        assert_eq!((p[0].x, p[0].y), pts[1]);
        assert_eq!((p[3].x, p[3].y), pts[2]);
        // first control leans on pts[0], second on pts[3]
        assert_abs_diff_eq!(p[1].x, 10.0 + SMOOTH_FACTOR * (20.0 - 0.0), epsilon = 1e-4);
        assert_abs_diff_eq!(p[1].y, 20.0 + SMOOTH_FACTOR * (10.0 - 0.0), epsilon = 1e-4);
        assert_abs_diff_eq!(p[2].x, 20.0 - SMOOTH_FACTOR * (30.0 - 10.0), epsilon = 1e-4);
        assert_abs_diff_eq!(p[2].y, 10.0 - SMOOTH_FACTOR * (30.0 - 20.0), epsilon = 1e-4);
    }
}
