// File: crates/report-figures/src/lib.rs
// Summary: Report datasets, churn CSV loading, and one render function per figure.

use std::path::Path;

use anyhow::{Context, Result};
use figure_core::{aggregate_hotspots, Axis, Chart, ChurnRow, RenderOptions, Series};
use thiserror::Error;

/// Fixed input path for the churn/complexity dataset.
pub const DATA_CSV: &str = "data/git.csv";
/// Fixed output directory for the rendered figures.
pub const OUT_DIR: &str = "figures";

const SYSTEMS: [&str; 3] = ["SistemaA", "SistemaB", "SistemaC"];
const BAR_WIDTH: f64 = 0.35;

struct MetricColumn {
    name: &'static str,
    values: [f64; 3],
    target: f64,
}

// Static code-quality metrics per system, with the report's target values.
const METRICS: [MetricColumn; 4] = [
    MetricColumn { name: "CBO", values: [12.3, 11.1, 9.4], target: 10.0 },
    MetricColumn { name: "LCOM", values: [0.68, 0.72, 0.66], target: 0.70 },
    MetricColumn { name: "Cyclomatic", values: [8.7, 7.9, 9.1], target: 10.0 },
    MetricColumn { name: "InheritanceDepth", values: [3.2, 2.9, 3.8], target: 5.0 },
];

#[derive(Debug, Error)]
pub enum DataError {
    #[error("missing required column '{column}' in {path}")]
    MissingColumn { column: &'static str, path: String },
}

/// Load the churn dataset. Requires `file`, `changes`, and `complexity`
/// columns (header match is case-insensitive); rows whose numeric fields do
/// not parse are skipped.
pub fn load_churn_csv(path: &Path) -> Result<Vec<ChurnRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let idx = |column: &'static str| -> Result<usize, DataError> {
        headers.iter().position(|h| h == column).ok_or(DataError::MissingColumn {
            column,
            path: path.display().to_string(),
        })
    };
    let i_file = idx("file")?;
    let i_changes = idx("changes")?;
    let i_complexity = idx("complexity")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let file = rec.get(i_file).unwrap_or("").trim();
        if file.is_empty() {
            continue;
        }
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()) };
        if let (Some(changes), Some(complexity)) = (parse(i_changes), parse(i_complexity)) {
            out.push(ChurnRow { file: file.to_string(), changes, complexity });
        }
    }
    Ok(out)
}

/// Final path segment, as shown next to each scatter point.
pub fn file_basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Grouped bar chart per metric: each system's value next to the target.
/// Writes `fig2_<metric>_vs_target.png` for all four metrics.
pub fn metric_target_figures(out_dir: &Path) -> Result<()> {
    let opts = RenderOptions::default();
    for m in &METRICS {
        let mut chart = Chart::new();
        chart.title = format!("{} vs Target", m.name);
        chart.x_axis = Axis::categorical("", &SYSTEMS);
        let top = m.values.iter().cloned().fold(m.target, f64::max);
        chart.y_axis = Axis::new(m.name, 0.0, top * 1.15);

        let measured = m
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64 - BAR_WIDTH / 2.0, v))
            .collect();
        let targets = (0..SYSTEMS.len())
            .map(|i| (i as f64 + BAR_WIDTH / 2.0, m.target))
            .collect();
        chart.add_series(Series::bars(m.name, measured, BAR_WIDTH));
        chart.add_series(Series::bars("Target", targets, BAR_WIDTH));

        let file = format!("fig2_{}_vs_target.png", m.name.to_lowercase());
        chart.render_to_png(&opts, out_dir.join(file))?;
    }
    Ok(())
}

/// Scatter of per-file churn (summed) vs complexity (averaged), each point
/// annotated with the file's final path segment.
/// Writes `fig4_hotspots_scatter.png`.
pub fn hotspot_scatter_figure(csv_path: &Path, out_dir: &Path) -> Result<()> {
    let rows = load_churn_csv(csv_path)
        .with_context(|| format!("failed to load churn dataset '{}'", csv_path.display()))?;
    let hotspots = aggregate_hotspots(&rows);

    let points = hotspots
        .iter()
        .map(|h| (h.total_changes, h.mean_complexity))
        .collect();
    let labels = hotspots
        .iter()
        .map(|h| file_basename(&h.file).to_string())
        .collect();

    let mut chart = Chart::new();
    chart.title = "Hotspots: Changes vs Complexity".to_string();
    chart.x_axis = Axis::new("Total Changes (churn)", 0.0, 1.0);
    chart.y_axis = Axis::new("Avg Complexity", 0.0, 1.0);
    chart.add_series(Series::scatter("", points).with_point_labels(labels));
    chart.autoscale_axes(0.05);

    chart.render_to_png(&RenderOptions::default(), out_dir.join("fig4_hotspots_scatter.png"))?;
    Ok(())
}

/// Grouped bars comparing the refactoring baseline against the outcome.
/// Writes `fig6_before_after.png`.
pub fn before_after_figure(out_dir: &Path) -> Result<()> {
    let labels = ["Coupling (CBO)", "Cohesion", "Delivery Time"];
    let before = [12.3, 0.53, 100.0];
    let after = [8.7, 0.74, 76.0];

    let mut chart = Chart::new();
    chart.title = "Before vs After Refactoring".to_string();
    chart.x_axis = Axis::categorical("", &labels);
    let top = before.iter().chain(after.iter()).cloned().fold(0.0, f64::max);
    chart.y_axis = Axis::new("", 0.0, top * 1.15);

    let before_bars = before
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64 - BAR_WIDTH / 2.0, v))
        .collect();
    let after_bars = after
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64 + BAR_WIDTH / 2.0, v))
        .collect();
    chart.add_series(Series::bars("Before", before_bars, BAR_WIDTH));
    chart.add_series(Series::bars("After", after_bars, BAR_WIDTH));

    chart.render_to_png(&RenderOptions::default(), out_dir.join("fig6_before_after.png"))?;
    Ok(())
}

/// Radial diagram of runtime calls: endpoints evenly spaced on a circle,
/// arrows from the UI hub with thickness scaled by call count.
/// Writes `fig3_runtime_calls.png`.
pub fn runtime_calls_figure(out_dir: &Path) -> Result<()> {
    let endpoints = ["/api/orders", "/api/payments", "/api/users", "/api/reviews"];
    let calls = [2_300_000.0, 1_100_000.0, 650_000.0, 420_000.0];

    let mut chart = Chart::new();
    chart.title = "Runtime Calls (thicker arrow = more calls)".to_string();
    chart.frame = false;
    let spokes = Series::spokes(
        endpoints.iter().map(|s| s.to_string()).collect(),
        calls.to_vec(),
    )
    .map_err(|e| anyhow::anyhow!(e))?
    .with_hub("UI");
    chart.add_series(spokes);
    chart.autoscale_axes(0.0);

    chart.render_to_png(&RenderOptions::default(), out_dir.join("fig3_runtime_calls.png"))?;
    Ok(())
}

/// Render every figure into `out_dir`, creating it first. The churn CSV is
/// only read for the scatter, so a missing/invalid CSV aborts after the four
/// metric figures and before any later one.
pub fn generate_all(csv_path: &Path, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory '{}'", out_dir.display()))?;
    metric_target_figures(out_dir)?;
    hotspot_scatter_figure(csv_path, out_dir)?;
    before_after_figure(out_dir)?;
    runtime_calls_figure(out_dir)?;
    Ok(())
}

/// Sorted file names currently present in the output directory.
pub fn output_listing(out_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(out_dir)
        .with_context(|| format!("listing '{}'", out_dir.display()))?
    {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_directories() {
        assert_eq!(file_basename("src/app/OrderService.cs"), "OrderService.cs");
        assert_eq!(file_basename("Program.cs"), "Program.cs");
        assert_eq!(file_basename(""), "");
    }
}
