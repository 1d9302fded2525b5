// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and value (Y) scales mapping chart data to pixels.

use crate::geometry::clamp;

/// Category labels spaced evenly between two pixel edges, keeping a border gap on each side.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub start_px: f32,
    pub end_px: f32,
    pub border_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(start_px: f32, end_px: f32, border_px: f32, count: usize) -> Self {
        let span = (end_px - start_px).max(0.0);
        Self { start_px, end_px, border_px: clamp(border_px, 0.0, span * 0.5), count }
    }

    /// Pixel distance between neighbouring labels.
    pub fn step(&self) -> f32 {
        if self.count < 2 {
            return 0.0;
        }
        (self.end_px - self.start_px - self.border_px * 2.0) / (self.count - 1) as f32
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        if self.count < 2 {
            return (self.start_px + self.end_px) * 0.5;
        }
        self.start_px + self.border_px + self.step() * index as f32
    }

    pub fn positions(&self) -> Vec<f32> {
        (0..self.count).map(|i| self.to_px(i)).collect()
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        let h = (self.bottom_px - self.top_px).max(1e-6);
        self.vmin + ((self.bottom_px - py) / h) as f64 * span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn categories_span_inner_width() {
        let s = CategoryScale::new(100.0, 700.0, 50.0, 7);
        let pos = s.positions();
        assert_eq!(pos.len(), 7);
        assert_abs_diff_eq!(pos[0], 150.0);
        assert_abs_diff_eq!(pos[6], 650.0, epsilon = 1e-3);
        assert_abs_diff_eq!(s.step(), 500.0 / 6.0, epsilon = 1e-4);
    }

    #[test]
    fn single_category_is_centered() {
        let s = CategoryScale::new(0.0, 200.0, 10.0, 1);
        assert_eq!(s.to_px(0), 100.0);
    }

    #[test]
    fn value_scale_round_trips_edges() {
        let s = ValueScale::new_linear(20.0, 420.0, 0.0, 7.5);
        assert_abs_diff_eq!(s.to_px(0.0), 420.0);
        assert_abs_diff_eq!(s.to_px(7.5), 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(s.from_px(220.0), 3.75, epsilon = 1e-6);
    }
}
