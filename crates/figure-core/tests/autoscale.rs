// File: crates/figure-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types.

use figure_core::{Axis, Chart, Series};

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    // Scatter points
    chart.add_series(Series::scatter("", vec![(1.0, 5.0), (40.0, 31.0)]));

    // Bars reach below the scatter minimum and include the 0.0 baseline
    chart.add_series(Series::bars("Bars", vec![(10.0, 2.0), (20.0, 45.0)], 2.0));

    chart.autoscale_axes(0.0);

    // X spans 1..40 from the scatter vs 9..21 from the bars => expect ~1..40
    assert!(chart.x_axis.min <= 1.0 + 1e-9);
    assert!(chart.x_axis.max >= 40.0 - 1e-9);

    // Y min includes the bar baseline (0.0)
    assert!(chart.y_axis.min <= 0.0 + 1e-9);
    // Y max is the tallest bar (45.0)
    assert!(chart.y_axis.max >= 45.0 - 1e-9);
}

#[test]
fn autoscale_keeps_categorical_x_slots() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("", &["A", "B"]);
    chart.add_series(Series::bars("Bars", vec![(0.0, 3.0), (1.0, 7.0)], 0.35));

    chart.autoscale_axes(0.0);

    // Slot padding survives autoscale
    assert!((chart.x_axis.min - (-0.7)).abs() < 1e-9);
    assert!((chart.x_axis.max - 1.7).abs() < 1e-9);
    assert!(chart.y_axis.max >= 7.0 - 1e-9);
}

#[test]
fn autoscale_empty_chart_falls_back() {
    let mut chart = Chart::new();
    chart.autoscale_axes(0.0);
    assert!((chart.x_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 1.0).abs() < 1e-9);
    assert!((chart.y_axis.min - 0.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 1.0).abs() < 1e-9);
}
