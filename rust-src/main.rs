//! hotstats - progress statistics for HOT Tasking Manager projects.
//!
//! Fetches project, contributions and daily progress records, derives
//! tables and renders a progress chart.

mod aggregation;
mod api;
mod capability;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod project;
mod visualization;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};


fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
