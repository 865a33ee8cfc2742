//! Visualization layer for charts and terminal tables.

mod chart;
mod export;
mod series;
mod tables;

pub use chart::ProgressChart;
pub use export::{export_chart, open_file, ChartFormat};
pub use series::Series;
pub use tables::{render_contributors_table, render_progress_table};
