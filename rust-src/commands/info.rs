//! Info command - print one project attribute.

use anyhow::Result;

use crate::project::ProjectStats;


/// Run the info command.
pub fn run(api_url: &str, project_id: u64, key: &str) -> Result<()> {
    let mut stats = ProjectStats::fetch(project_id, api_url)?;
    let value = stats.get(key)?;

    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
