// File: crates/report-figures/src/main.rs
// Summary: One-shot entry point: render every report figure, then list the output directory.

use std::path::Path;

use anyhow::Result;
use report_figures::{generate_all, output_listing, DATA_CSV, OUT_DIR};

fn main() -> Result<()> {
    generate_all(Path::new(DATA_CSV), Path::new(OUT_DIR))?;

    println!("Figures created in ./{OUT_DIR}:");
    for name in output_listing(Path::new(OUT_DIR))? {
        println!("{name}");
    }
    Ok(())
}
