use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figure_core::{Axis, Chart, RenderOptions, Series};

fn build_chart_scatter(n: usize) -> Chart {
    let mut ch = Chart::new();
    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64;
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        data.push((x, y));
    }
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    ch.y_axis = Axis::new("Y", -12.0, 12.0);
    ch.add_series(Series::scatter("", data));
    ch
}

fn build_chart_bars(n: usize) -> Chart {
    let mut ch = Chart::new();
    let data = (0..n).map(|i| (i as f64, ((i % 7) + 1) as f64)).collect();
    ch.x_axis = Axis::new("X", -1.0, n as f64);
    ch.y_axis = Axis::new("Y", 0.0, 8.0);
    ch.add_series(Series::bars("Bars", data, 0.8));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("scatter_{n}"), |b| {
            let ch = build_chart_scatter(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
        group.bench_function(format!("bars_{n}"), |b| {
            let ch = build_chart_bars(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
