//! Contributors command - print the per-contributor table.

use anyhow::Result;

use crate::project::ProjectStats;
use crate::visualization::render_contributors_table;


/// Run the contributors command.
pub fn run(api_url: &str, project_id: u64) -> Result<()> {
    let mut stats = ProjectStats::fetch(project_id, api_url)?;
    let table = stats.get_contributors_df()?;

    println!("\n{}", "=".repeat(60));
    println!("{:^60}", format!("Project {} contributors", project_id));
    println!("{}\n", "=".repeat(60));

    render_contributors_table(&table);
    Ok(())
}
