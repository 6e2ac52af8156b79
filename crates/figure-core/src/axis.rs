// File: crates/figure-core/src/axis.rs
// Summary: Axis model with labels, ranges, and optional category slots.

#[derive(Clone)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// When non-empty, the axis is categorical: slot `i` sits at coordinate
    /// `i as f64` and is labeled `categories[i]` instead of numeric ticks.
    pub categories: Vec<String>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, categories: Vec::new() }
    }

    /// Categorical axis over `names`, one integer slot per name, padded by
    /// 0.7 slots on either side so the outer bars clear the frame.
    pub fn categorical(label: impl Into<String>, names: &[&str]) -> Self {
        let n = names.len().max(1);
        Self {
            label: label.into(),
            min: -0.7,
            max: (n - 1) as f64 + 0.7,
            categories: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 100.0)
    }

    pub fn is_categorical(&self) -> bool { !self.categories.is_empty() }
}
