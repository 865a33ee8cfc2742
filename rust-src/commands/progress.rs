//! Progress command - print the daily progress table.

use anyhow::Result;

use crate::project::ProjectStats;
use crate::visualization::render_progress_table;


/// Run the progress command.
pub fn run(api_url: &str, project_id: u64) -> Result<()> {
    let mut stats = ProjectStats::fetch(project_id, api_url)?;
    let table = stats.get_progress_df()?;

    println!("\n{}", "=".repeat(60));
    println!("{:^60}", format!("Project {} progress", project_id));
    println!("{}\n", "=".repeat(60));

    render_progress_table(&table);
    Ok(())
}
