//! Error types for project statistics.

use thiserror::Error;

use crate::capability::Capability;


/// Result type for project statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;


/// Errors surfaced by fetching, deriving and rendering project statistics.
#[derive(Error, Debug)]
pub enum StatsError {
    /// Remote endpoint answered with a non-200 status.
    #[error("Could not retrieve stats for project id {project_id} ({url} returned {status})")]
    Fetch {
        project_id: u64,
        url: String,
        status: u16,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Attribute lookup on the project record missed.
    #[error("Key not found in project record: '{0}'")]
    KeyNotFound(String),

    #[error("{0} support is required but was not compiled in (enable the '{feature}' feature)", feature = .0.feature())]
    MissingCapability(Capability),

    #[error("'{item}' is not a valid value to be plotted, choose from {valid:?}")]
    InvalidSeriesSelection {
        item: String,
        valid: Vec<&'static str>,
    },

    #[error("Invalid date in progress stats: '{0}'")]
    InvalidDate(String),

    #[error("Failed to render chart: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_series_message_lists_choices() {
        let err = StatsError::InvalidSeriesSelection {
            item: "bogus".to_string(),
            valid: vec!["mapped", "cumulative_mapped"],
        };
        let message = err.to_string();
        assert!(message.contains("'bogus'"));
        assert!(message.contains("\"cumulative_mapped\""));
    }

    #[test]
    fn test_missing_capability_names_feature() {
        let message = StatsError::MissingCapability(Capability::Chart).to_string();
        assert!(message.contains("Chart rendering"));
        assert!(message.contains("'chart'"));
    }
}
