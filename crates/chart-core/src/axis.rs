// File: crates/chart-core/src/axis.rs
// Summary: Value axis borders, ticks and label text; category axis labels.

use crate::error::{ChartError, Result};
use crate::format::LabelFormat;
use crate::series::LineSet;

/// Tick intervals used when no step is given.
pub const DEFAULT_STEPS: f64 = 3.0;

/// User overrides for the value axis. Both empty means "derive from data".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisBorders {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl AxisBorders {
    pub fn new(min: f64, max: f64, step: Option<f64>) -> Result<Self> {
        if min >= max {
            return Err(ChartError::InvalidBorders { min, max });
        }
        if let Some(s) = step {
            if !(s > 0.0) {
                return Err(ChartError::InvalidStep(s));
            }
        }
        Ok(Self { min: Some(min), max: Some(max), step })
    }

    pub fn with_step(step: f64) -> Result<Self> {
        if !(step > 0.0) {
            return Err(ChartError::InvalidStep(step));
        }
        Ok(Self { min: None, max: None, step: Some(step) })
    }
}

/// Resolved value axis: borders, step and formatted tick labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl ValueAxis {
    pub fn resolve(sets: &[LineSet], borders: &AxisBorders, format: &LabelFormat) -> Self {
        let (min, max) = match (borders.min, borders.max) {
            (Some(min), Some(max)) => (min, max),
            _ => match borders.step {
                Some(step) => find_borders_with_step(sets, step),
                None => find_borders(sets),
            },
        };
        let step = borders.step.unwrap_or((max - min) / DEFAULT_STEPS);
        let values = calculate_values(min, max, step);
        let labels = values.iter().map(|v| format.format(*v)).collect();
        tracing::debug!(min, max, step, ticks = values.len(), "resolved value axis");
        Self { min, max, step, values, labels }
    }
}

/// Data min/max over all sets, widened to include zero. Equal borders grow max by one.
pub fn find_borders(sets: &[LineSet]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for set in sets {
        for p in set.points() {
            min = min.min(p.value);
            max = max.max(p.value);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if max < 0.0 { max = 0.0; }
    if min > 0.0 { min = 0.0; }
    if min == max { max += 1.0; }
    (min, max)
}

/// Like [`find_borders`], but max grows in whole units until the span fits `step`.
pub fn find_borders_with_step(sets: &[LineSet], step: f64) -> (f64, f64) {
    let (min, mut max) = find_borders(sets);
    if step <= 0.0 {
        return (min, max);
    }
    // Bounded: a non-integer step may never divide an integer-grown span exactly.
    for _ in 0..10_000 {
        if fits_step(max - min, step) {
            break;
        }
        max += 1.0;
    }
    (min, max)
}

fn fits_step(span: f64, step: f64) -> bool {
    let r = span % step;
    r.abs() < 1e-9 || (step - r).abs() < 1e-9
}

/// Ticks `min, min+step, ...` up to `max`, plus one more if the last falls short of `max`.
pub fn calculate_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(max >= min) {
        return vec![min];
    }
    let mut out = Vec::new();
    let mut i = 0u32;
    loop {
        let v = min + step * i as f64;
        if v > max + 1e-9 {
            break;
        }
        out.push(v);
        i += 1;
    }
    if let Some(&last) = out.last() {
        if last < max - 1e-9 {
            out.push(last + step);
        }
    }
    out
}

/// Category labels come from the first set.
pub fn category_labels(sets: &[LineSet]) -> Vec<String> {
    sets.first()
        .map(|s| s.points().iter().map(|p| p.label.clone()).collect())
        .unwrap_or_default()
}
