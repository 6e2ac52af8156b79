// File: crates/figure-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use figure_core::{Axis, Chart, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    // Minimal data: one grouped bar pair per category
    let mut chart = Chart::new();
    chart.title = "Smoke".to_string();
    chart.x_axis = Axis::categorical("", &["A", "B", "C"]);
    chart.y_axis = Axis::new("Value", 0.0, 4.0);
    chart.add_series(Series::bars(
        "Measured",
        vec![(-0.175, 2.0), (0.825, 1.0), (1.825, 3.5)],
        0.35,
    ));
    chart.add_series(Series::bars(
        "Target",
        vec![(0.175, 2.5), (1.175, 2.5), (2.175, 2.5)],
        0.35,
    ));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn png_decodes_to_requested_dimensions() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 1.0);
    chart.y_axis = Axis::new("Y", 0.0, 1.0);
    chart.add_series(Series::scatter("", vec![(0.2, 0.3), (0.8, 0.6)]));

    let mut opts = RenderOptions::default();
    opts.width = 320;
    opts.height = 200;
    opts.draw_labels = false;

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!(img.width(), 320);
    assert_eq!(img.height(), 200);
}
