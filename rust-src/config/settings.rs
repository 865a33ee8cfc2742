//! Application settings and path constants.

use std::path::PathBuf;


/// Production Tasking Manager API.
pub const DEFAULT_API_URL: &str = "https://tasking-manager-tm4-production-api.hotosm.org";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "HOTSTATS_API_URL";

/// Project charted when no identifier is given.
pub const DEFAULT_PROJECT_ID: u64 = 9507;


/// Default location for an exported chart.
pub fn default_chart_path(project_id: u64, svg: bool) -> PathBuf {
    let extension = if svg { "svg" } else { "png" };
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hotstats")
        .join(format!("project-{project_id}.{extension}"))
}


/// Scratch file used when a chart is displayed rather than saved.
pub fn preview_chart_path(project_id: u64) -> PathBuf {
    std::env::temp_dir().join(format!("hotstats-project-{project_id}.png"))
}
