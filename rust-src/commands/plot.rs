//! Plot command - render the project progress chart.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::DEFAULT_PROJECT_ID;
use crate::project::{PlotOptions, ProjectStats};
use crate::visualization::{open_file, Series};


/// Run the plot command.
pub fn run(
    api_url: &str,
    project_id: u64,
    which: Vec<String>,
    total: bool,
    output: Option<PathBuf>,
    should_open: bool,
) -> Result<()> {
    // Reject bad series names before touching the network
    Series::parse_selection(Some(which.as_slice()))?;

    println!("Loading project {}...", project_id);
    let mut stats = ProjectStats::fetch(project_id, api_url)
        .with_context(|| format!("Failed to load project {project_id}"))?;

    let options = PlotOptions {
        which: Some(which),
        total,
        save_path: output.clone(),
    };
    stats.plot(&options)?;

    if let Some(path) = output {
        println!("\x1b[32m+ Exported to: {}\x1b[0m", path.display());

        if should_open {
            println!("Opening {}...", path.display());
            open_file(&path)?;
        }
    }

    Ok(())
}


/// Default behaviour: chart the default project with the total line.
pub fn run_default(api_url: &str) -> Result<()> {
    println!("Loading project {}...", DEFAULT_PROJECT_ID);
    let mut stats = ProjectStats::fetch(DEFAULT_PROJECT_ID, api_url)
        .with_context(|| format!("Failed to load project {DEFAULT_PROJECT_ID}"))?;

    let progress = stats.get_progress_df()?;
    println!("Loaded {} days of progress.", progress.len());

    stats.plot(&PlotOptions {
        total: true,
        ..Default::default()
    })?;

    Ok(())
}
