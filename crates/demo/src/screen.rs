// File: crates/demo/src/screen.rs
// Summary: The line chart screen: fills a chart view with seven fixed points and shows it animated.

use std::collections::BTreeMap;

use chart_core::{Animation, Easing, LabelFormat, LineChart, LineSet, Result};

/// Label/value pairs shown by the screen, in display order.
pub const SAMPLE_POINTS: [(&str, f64); 7] = [
    ("label1", 5.0),
    ("label2", 4.5),
    ("label3", 4.7),
    ("label4", 3.5),
    ("label5", 3.6),
    ("label6", 7.5),
    ("label7", 7.5),
];

/// State a host hands back when it recreates a screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedState {
    entries: BTreeMap<String, String>,
}

impl SavedState {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

/// Host lifecycle: called once the view is ready to receive content.
pub trait Screen {
    fn on_view_created(&mut self, view: &mut LineChart, saved_state: Option<&SavedState>) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LineChartScreen;

impl LineChartScreen {
    pub fn new() -> Self { Self }

    /// Split the sample table into parallel label and value sequences.
    pub fn sample_series() -> (Vec<&'static str>, Vec<f64>) {
        SAMPLE_POINTS.iter().copied().unzip()
    }
}

impl Screen for LineChartScreen {
    fn on_view_created(&mut self, view: &mut LineChart, _saved_state: Option<&SavedState>) -> Result<()> {
        let (labels, values) = Self::sample_series();
        let line_set = LineSet::new(&labels, &values)?.with_color(view.theme().primary);

        view.add_data(line_set)?;
        view.set_labels_format(LabelFormat::whole_numbers());
        view.show_with(
            Animation::new()
                .with_easing(Easing::AccelerateDecelerate)
                .from_alpha(0.0),
        );
        tracing::info!(points = labels.len(), "line chart screen activated");
        Ok(())
    }
}
