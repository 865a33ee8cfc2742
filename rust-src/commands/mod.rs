//! CLI command implementations.

pub mod contributors;
pub mod info;
pub mod plot;
pub mod progress;
