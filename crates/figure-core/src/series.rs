// File: crates/figure-core/src/series.rs
// Summary: Series model for bar, scatter, and radial-spoke data.
// Notes:
// - A `Series` is immutable after construction; the `with_*` helpers are
//   builders, not mutators of shared state.

use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub enum SeriesType {
    Bars,     // vertical bars rising from `baseline` (default 0.0)
    Scatter,  // markers, optionally annotated per point
    Spokes,   // arrows from a hub to points on the unit circle
}

#[derive(Clone)]
pub struct Series {
    pub series_type: SeriesType,
    /// Legend entry; empty means the series is unlisted.
    pub name: String,
    /// Bars: (slot center, value). Scatter: data points. Spokes: ring
    /// positions on the unit circle, computed by `Series::spokes`.
    pub data_xy: Vec<(f64, f64)>,
    /// Per-point annotations (Scatter file names, Spokes endpoint labels).
    pub point_labels: Vec<String>,
    /// Spokes: arrow thickness source, one weight per ring position.
    pub weights: Vec<f64>,
    /// Bars: bar width in x units.
    pub bar_width: f64,
    /// Bars rise from here; `None` means 0.0.
    pub baseline: Option<f64>,
    /// Spokes: label drawn at the hub.
    pub hub: String,
}

impl Series {
    fn empty(series_type: SeriesType) -> Self {
        Self {
            series_type,
            name: String::new(),
            data_xy: Vec::new(),
            point_labels: Vec::new(),
            weights: Vec::new(),
            bar_width: 0.8,
            baseline: None,
            hub: String::new(),
        }
    }

    /// Bar series: one bar per (slot center, value) pair.
    pub fn bars(name: impl Into<String>, data: Vec<(f64, f64)>, bar_width: f64) -> Self {
        let mut s = Self::empty(SeriesType::Bars);
        s.name = name.into();
        s.data_xy = data;
        s.bar_width = bar_width.max(1e-3);
        s
    }

    /// Scatter series over raw data points.
    pub fn scatter(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        let mut s = Self::empty(SeriesType::Scatter);
        s.name = name.into();
        s.data_xy = points;
        s
    }

    /// Radial spokes: one labeled endpoint per weight, positioned evenly
    /// around the unit circle starting at angle 0. Fails when the label and
    /// weight counts differ.
    pub fn spokes(labels: Vec<String>, weights: Vec<f64>) -> Result<Self, &'static str> {
        if labels.len() != weights.len() {
            return Err("spoke labels and weights differ in length");
        }
        let n = labels.len();
        let mut s = Self::empty(SeriesType::Spokes);
        s.data_xy = (0..n)
            .map(|i| {
                let theta = TAU * i as f64 / n.max(1) as f64;
                (theta.cos(), theta.sin())
            })
            .collect();
        s.point_labels = labels;
        s.weights = weights;
        Ok(s)
    }

    pub fn with_point_labels(mut self, labels: Vec<String>) -> Self {
        self.point_labels = labels;
        self
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn with_hub(mut self, hub: impl Into<String>) -> Self {
        self.hub = hub.into();
        self
    }

    /// Get baseline value or default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 { self.baseline.unwrap_or(0.0) }
}
