// File: crates/figure-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use figure_core::{theme, Axis, Chart, RenderOptions, Series};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::scatter("", vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Check background alpha in top-left pixel (RGBA)
    let a = px[3];
    assert_eq!(a, 255);
}

#[test]
fn theme_lookup_falls_back_to_light() {
    assert_eq!(theme::find("dark").name, "dark");
    assert_eq!(theme::find("no-such-theme").name, "light");

    // A dark render has a dark top-left background pixel
    let mut chart = Chart::new();
    chart.add_series(Series::scatter("", vec![(0.5, 0.5)]));
    chart.autoscale_axes(0.0);

    let mut opts = RenderOptions::default();
    opts.theme = theme::find("dark");
    opts.draw_labels = false;
    let (px, _, _, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert!(px[0] < 64 && px[1] < 64 && px[2] < 64, "background should be dark");
}
