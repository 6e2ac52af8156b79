// File: crates/figure-core/src/aggregate.rs
// Summary: Per-file churn/complexity rollup feeding the hotspot scatter.

use std::collections::BTreeMap;

/// One record of the churn dataset: a file touched `changes` times at a
/// measured `complexity`.
#[derive(Clone, Debug, PartialEq)]
pub struct ChurnRow {
    pub file: String,
    pub changes: f64,
    pub complexity: f64,
}

/// Rollup of every `ChurnRow` sharing a file: churn sums, complexity
/// averages.
#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
    pub file: String,
    pub total_changes: f64,
    pub mean_complexity: f64,
}

/// Group rows by file, summing `changes` and averaging `complexity`.
/// Output is sorted by file name, so the result does not depend on input
/// row order.
pub fn aggregate_hotspots(rows: &[ChurnRow]) -> Vec<Hotspot> {
    let mut acc: BTreeMap<&str, (f64, f64, usize)> = BTreeMap::new();
    for row in rows {
        let e = acc.entry(row.file.as_str()).or_insert((0.0, 0.0, 0));
        e.0 += row.changes;
        e.1 += row.complexity;
        e.2 += 1;
    }
    acc.into_iter()
        .map(|(file, (changes, complexity, count))| Hotspot {
            file: file.to_string(),
            total_changes: changes,
            mean_complexity: complexity / count as f64,
        })
        .collect()
}
