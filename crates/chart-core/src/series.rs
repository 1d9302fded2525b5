// File: crates/chart-core/src/series.rs
// Summary: Line set model: ordered labeled points plus line/dot styling.
// Notes:
// - Colors are plain skia colors so the renderer can use them directly.
// - `end == None` means "up to the last point".

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Default line and dot color (opaque black).
pub const DEFAULT_COLOR: skia::Color = skia::Color::BLACK;
/// Default line thickness in pixels.
pub const LINE_THICKNESS: f32 = 4.0;
/// Default dot radius in pixels.
pub const DOTS_RADIUS: f32 = 4.0;
/// Default stroke thickness around a dot, in pixels.
pub const DOTS_STROKE_THICKNESS: f32 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub label: String,
    pub value: f64,
    pub color: skia::Color,
    pub radius: f32,
    /// Stroke (thickness, color) drawn around the dot, if any.
    pub stroke: Option<(f32, skia::Color)>,
    /// Dots stay hidden until any dot property is set.
    pub visible: bool,
}

impl Point {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: DEFAULT_COLOR,
            radius: DOTS_RADIUS,
            stroke: None,
            visible: false,
        }
    }
}

/// Vertical gradient painted under the line, from the inner chart top to its bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientFill {
    pub colors: Vec<skia::Color>,
    /// Relative stop positions in `[0, 1]`; evenly spaced when `None`.
    pub positions: Option<Vec<f32>>,
}

/// Blurred copy of the line drawn behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub radius: f32,
    pub dx: f32,
    pub dy: f32,
    pub color: skia::Color,
}

#[derive(Clone, Debug)]
pub struct LineSet {
    points: Vec<Point>,
    pub color: skia::Color,
    pub thickness: f32,
    pub smooth: bool,
    pub dashed: Option<Vec<f32>>,
    pub fill: Option<skia::Color>,
    pub gradient_fill: Option<GradientFill>,
    pub shadow: Option<Shadow>,
    pub visible: bool,
    begin: usize,
    end: Option<usize>,
}

impl Default for LineSet {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            color: DEFAULT_COLOR,
            thickness: LINE_THICKNESS,
            smooth: false,
            dashed: None,
            fill: None,
            gradient_fill: None,
            shadow: None,
            visible: false,
            begin: 0,
            end: None,
        }
    }
}

impl LineSet {
    /// Build a set from parallel label/value slices, keeping their order.
    pub fn new<S: AsRef<str>>(labels: &[S], values: &[f64]) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(ChartError::LengthMismatch { labels: labels.len(), values: values.len() });
        }
        let mut set = Self::default();
        for (label, &value) in labels.iter().zip(values) {
            set.add_point(label.as_ref(), value);
        }
        Ok(set)
    }

    pub fn add_point(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(Point::new(label, value));
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// First displayed point index.
    pub fn begin(&self) -> usize { self.begin }

    /// One past the last displayed point index.
    pub fn end(&self) -> usize { self.end.unwrap_or(self.points.len()) }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_thickness(mut self, thickness: f32) -> Result<Self> {
        if thickness < 0.0 {
            return Err(ChartError::InvalidThickness(thickness));
        }
        self.thickness = thickness;
        Ok(self)
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Dash the line with alternating on/off lengths.
    pub fn with_dashed(mut self, intervals: Vec<f32>) -> Self {
        self.dashed = Some(intervals);
        self
    }

    /// Fill the area under the line. Also takes over the line color while
    /// that is still the default.
    pub fn with_fill(mut self, color: skia::Color) -> Self {
        self.fill = Some(color);
        if self.color == DEFAULT_COLOR {
            self.color = color;
        }
        self
    }

    /// Fill the area under the line with a vertical gradient. Like
    /// [`LineSet::with_fill`], the first color becomes the line color while
    /// that is still the default.
    pub fn with_gradient_fill(mut self, colors: Vec<skia::Color>, positions: Option<Vec<f32>>) -> Result<Self> {
        let first = *colors.first().ok_or(ChartError::InvalidGradient("no colors"))?;
        if let Some(pos) = &positions {
            if pos.len() != colors.len() {
                return Err(ChartError::InvalidGradient("one position per color required"));
            }
            if pos.iter().any(|p| !(0.0..=1.0).contains(p)) || pos.windows(2).any(|w| w[1] < w[0]) {
                return Err(ChartError::InvalidGradient("positions must increase within 0..=1"));
            }
        }
        self.gradient_fill = Some(GradientFill { colors, positions });
        if self.color == DEFAULT_COLOR {
            self.color = first;
        }
        Ok(self)
    }

    /// Shadow behind the line. A zero radius removes it.
    pub fn with_shadow(mut self, radius: f32, dx: f32, dy: f32, color: skia::Color) -> Result<Self> {
        if radius < 0.0 {
            return Err(ChartError::InvalidRadius(radius));
        }
        self.shadow = (radius > 0.0).then_some(Shadow { radius, dx, dy, color });
        Ok(self)
    }

    pub fn begin_at(mut self, index: usize) -> Result<Self> {
        if index > self.points.len() {
            return Err(ChartError::IndexOutOfRange { index, len: self.points.len() });
        }
        self.begin = index;
        Ok(self)
    }

    pub fn end_at(mut self, index: usize) -> Result<Self> {
        if index > self.points.len() || index < self.begin {
            return Err(ChartError::IndexOutOfRange { index, len: self.points.len() });
        }
        self.end = Some(index);
        Ok(self)
    }

    pub fn with_dots_color(mut self, color: skia::Color) -> Self {
        for p in &mut self.points {
            p.color = color;
            p.visible = true;
        }
        self
    }

    pub fn with_dots_radius(mut self, radius: f32) -> Result<Self> {
        if radius < 0.0 {
            return Err(ChartError::InvalidRadius(radius));
        }
        for p in &mut self.points {
            p.radius = radius;
            p.visible = true;
        }
        Ok(self)
    }

    /// Stroke every dot with `color` at [`DOTS_STROKE_THICKNESS`].
    pub fn with_dots_stroke_color(mut self, color: skia::Color) -> Self {
        for p in &mut self.points {
            p.stroke = Some((DOTS_STROKE_THICKNESS, color));
            p.visible = true;
        }
        self
    }

    pub fn with_dots_stroke(mut self, thickness: f32, color: skia::Color) -> Result<Self> {
        if thickness < 0.0 {
            return Err(ChartError::InvalidThickness(thickness));
        }
        for p in &mut self.points {
            p.stroke = Some((thickness, color));
            p.visible = true;
        }
        Ok(self)
    }
}
