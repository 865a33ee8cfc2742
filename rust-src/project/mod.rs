//! Per-project statistics: lazily fetched records, derived tables and charts.

#[cfg(test)]
mod fixtures;
mod plot;
mod project_stats;

pub use plot::PlotOptions;
pub use project_stats::ProjectStats;
