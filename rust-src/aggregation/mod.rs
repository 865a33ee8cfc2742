//! Tabular views derived from the raw API records.

mod contributors_table;
mod progress_table;

pub use contributors_table::{ContributorSummary, ContributorsTable};
pub use progress_table::ProgressTable;
