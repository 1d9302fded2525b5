// File: crates/chart-core/tests/animation.rs
// Purpose: Enter animation frames start on the baseline, ease in, and settle on the targets.

use std::time::Duration;

use approx::assert_abs_diff_eq;
use chart_core::{Animation, Easing, LineChart, LineSet, RenderOptions};

fn chart() -> LineChart {
    let mut chart = LineChart::new();
    chart
        .add_data(LineSet::new(&["a", "b", "c", "d"], &[5.0, 4.5, 4.7, 3.5]).unwrap())
        .unwrap();
    chart
}

#[test]
fn points_rise_from_baseline() {
    let mut chart = chart();
    chart.show_with(
        Animation::new()
            .with_easing(Easing::AccelerateDecelerate)
            .with_duration(Duration::from_millis(500))
            .from_alpha(0.0),
    );
    let layout = chart.layout(&RenderOptions::default());

    let first = chart.frame(&layout);
    assert_eq!(first.progress, 0.0);
    assert_eq!(first.alpha, 0.0);
    for (i, &(x, y)) in first.sets[0].iter().enumerate() {
        assert_eq!(x, layout.points[0][i].0);
        assert_eq!(y, layout.baseline_px);
    }

    assert!(chart.advance(Duration::from_millis(250)));
    let mid = chart.frame(&layout);
    assert_abs_diff_eq!(mid.progress, 0.5, epsilon = 1e-9);
    for (i, &(_, y)) in mid.sets[0].iter().enumerate() {
        let target = layout.points[0][i].1;
        assert_abs_diff_eq!(y, (layout.baseline_px + target) / 2.0, epsilon = 1e-3);
    }

    assert!(!chart.advance(Duration::from_millis(400)));
    assert!(!chart.is_animating());
    let last = chart.frame(&layout);
    assert_eq!(last.alpha, 1.0);
    assert_eq!(last.sets, layout.points);
}

#[test]
fn static_show_is_settled() {
    let mut chart = chart();
    chart.show();
    assert!(!chart.advance(Duration::from_millis(16)));
    let layout = chart.layout(&RenderOptions::default());
    let frame = chart.frame(&layout);
    assert_eq!(frame.progress, 1.0);
    assert_eq!(frame.sets, layout.points);
}

#[test]
fn value_axis_labels_use_chart_format() {
    let mut chart = chart();
    chart.set_labels_format(chart_core::LabelFormat::parse("0.0").unwrap());
    let layout = chart.layout(&RenderOptions::default());
    // 0..5 in three steps
    assert_eq!(layout.value_axis.labels, vec!["0.0", "1.7", "3.3", "5.0"]);
    assert_eq!(layout.x_labels, vec!["a", "b", "c", "d"]);
    // Lowest tick sits on the baseline, highest above it.
    assert_eq!(layout.y_positions[0], layout.baseline_px);
    assert!(layout.y_positions[3] < layout.y_positions[0]);
}
