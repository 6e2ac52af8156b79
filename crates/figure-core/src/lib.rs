// File: crates/figure-core/src/lib.rs
// Summary: Core library entry point; exports public API for figure construction and rendering.

pub mod aggregate;
pub mod axis;
pub mod chart;
pub mod geometry;
pub mod grid;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use aggregate::{aggregate_hotspots, ChurnRow, Hotspot};
pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use series::{Series, SeriesType};
pub use text::TextShaper;
pub use theme::Theme;
