//! Records returned by the contributions and daily progress endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// Contributor skill tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingLevel {
    Beginner,
    Intermediate,
    Advanced,
}


impl MappingLevel {
    pub const ALL: [MappingLevel; 3] = [
        MappingLevel::Beginner,
        MappingLevel::Intermediate,
        MappingLevel::Advanced,
    ];

    /// Parse the API spelling (`BEGINNER`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "BEGINNER" => Some(MappingLevel::Beginner),
            "INTERMEDIATE" => Some(MappingLevel::Intermediate),
            "ADVANCED" => Some(MappingLevel::Advanced),
            _ => None,
        }
    }

    /// Label used in chart annotations.
    pub fn label(self) -> &'static str {
        match self {
            MappingLevel::Beginner => "Beginner",
            MappingLevel::Intermediate => "Intermediate",
            MappingLevel::Advanced => "Advanced",
        }
    }
}


/// Body of `/contributions/`.
///
/// Per-user entries are kept as open maps; the API adds fields over time and
/// the contributors table passes them through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionsRecord {
    #[serde(rename = "userContributions", default)]
    pub user_contributions: Vec<Map<String, Value>>,
}


/// One day of `/contributions/queries/day/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressDay {
    pub date: String,
    #[serde(default)]
    pub mapped: i64,
    #[serde(default)]
    pub validated: i64,
    #[serde(default)]
    pub cumulative_mapped: i64,
    #[serde(default)]
    pub cumulative_validated: i64,
    #[serde(default)]
    pub total_tasks: i64,
}


/// Body of `/contributions/queries/day/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub stats: Vec<ProgressDay>,
}
