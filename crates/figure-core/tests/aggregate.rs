// File: crates/figure-core/tests/aggregate.rs
// Purpose: Validate the per-file churn/complexity rollup.

use figure_core::{aggregate_hotspots, ChurnRow};

fn row(file: &str, changes: f64, complexity: f64) -> ChurnRow {
    ChurnRow { file: file.to_string(), changes, complexity }
}

#[test]
fn sums_changes_and_averages_complexity() {
    let rows = vec![
        row("src/a.cs", 1.0, 4.0),
        row("src/a.cs", 2.0, 5.0),
        row("src/a.cs", 3.0, 6.0),
    ];
    let agg = aggregate_hotspots(&rows);
    assert_eq!(agg.len(), 1);
    assert_eq!(agg[0].file, "src/a.cs");
    assert!((agg[0].total_changes - 6.0).abs() < 1e-12);
    assert!((agg[0].mean_complexity - 5.0).abs() < 1e-12);
}

#[test]
fn result_is_independent_of_row_order() {
    let rows = vec![
        row("src/b.cs", 7.0, 10.0),
        row("src/a.cs", 1.0, 4.0),
        row("src/b.cs", 3.0, 20.0),
        row("src/a.cs", 2.0, 6.0),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();

    let agg = aggregate_hotspots(&rows);
    let agg_rev = aggregate_hotspots(&reversed);
    assert_eq!(agg, agg_rev);

    // Sorted by file name
    assert_eq!(agg[0].file, "src/a.cs");
    assert_eq!(agg[1].file, "src/b.cs");
    assert!((agg[1].total_changes - 10.0).abs() < 1e-12);
    assert!((agg[1].mean_complexity - 15.0).abs() < 1e-12);
}

#[test]
fn empty_input_aggregates_to_nothing() {
    assert!(aggregate_hotspots(&[]).is_empty());
}

#[test]
fn single_row_passes_through() {
    let agg = aggregate_hotspots(&[row("Program.cs", 4.0, 9.5)]);
    assert_eq!(agg.len(), 1);
    assert!((agg[0].total_changes - 4.0).abs() < 1e-12);
    assert!((agg[0].mean_complexity - 9.5).abs() < 1e-12);
}
