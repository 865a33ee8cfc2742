//! Per-contributor table with task lists stripped.

use serde_json::{Map, Value};

use crate::models::MappingLevel;


/// Task-list fields removed from every contributor row.
pub const DROPPED_COLUMNS: [&str; 2] = ["mappedTasks", "validatedTasks"];


/// Contributor counts shown in the chart annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContributorSummary {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
    pub total: usize,
}


impl ContributorSummary {
    pub fn count(&self, level: MappingLevel) -> usize {
        match level {
            MappingLevel::Beginner => self.beginner,
            MappingLevel::Intermediate => self.intermediate,
            MappingLevel::Advanced => self.advanced,
        }
    }
}


/// One row per contributor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributorsTable {
    columns: Vec<String>,
    rows: Vec<Map<String, Value>>,
}


impl ContributorsTable {
    /// Copy `userContributions`, dropping the task-list fields.
    ///
    /// Columns are the union of remaining keys, in the order rows are seen.
    pub fn from_contributions(user_contributions: &[Map<String, Value>]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut rows = Vec::with_capacity(user_contributions.len());

        for contribution in user_contributions {
            let mut row = contribution.clone();
            for dropped in DROPPED_COLUMNS {
                row.remove(dropped);
            }

            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
            rows.push(row);
        }

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mapping level of a row, if present and recognised.
    pub fn level_of(row: &Map<String, Value>) -> Option<MappingLevel> {
        row.get("mappingLevel")
            .and_then(Value::as_str)
            .and_then(MappingLevel::parse)
    }

    /// Number of contributors at the given mapping level.
    pub fn count_by_level(&self, level: MappingLevel) -> usize {
        self.rows
            .iter()
            .filter(|row| Self::level_of(row) == Some(level))
            .count()
    }

    pub fn summary(&self) -> ContributorSummary {
        ContributorSummary {
            beginner: self.count_by_level(MappingLevel::Beginner),
            intermediate: self.count_by_level(MappingLevel::Intermediate),
            advanced: self.count_by_level(MappingLevel::Advanced),
            total: self.len(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contribution(username: &str, level: &str) -> Map<String, Value> {
        match json!({
            "username": username,
            "mappingLevel": level,
            "mapped": 3,
            "validated": 1,
            "total": 4,
            "mappedTasks": [1, 2, 3],
            "validatedTasks": [4]
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_task_lists_dropped() {
        let input = vec![
            contribution("alice", "BEGINNER"),
            contribution("bob", "INTERMEDIATE"),
            contribution("carol", "ADVANCED"),
        ];
        let table = ContributorsTable::from_contributions(&input);

        assert_eq!(table.len(), input.len());
        for dropped in DROPPED_COLUMNS {
            assert!(!table.columns().iter().any(|c| c == dropped));
            assert!(table.rows().iter().all(|row| !row.contains_key(dropped)));
        }
        assert!(table.columns().iter().any(|c| c == "username"));
    }

    #[test]
    fn test_source_is_not_modified() {
        let input = vec![contribution("alice", "BEGINNER")];
        let _ = ContributorsTable::from_contributions(&input);
        assert!(input[0].contains_key("mappedTasks"));
    }

    #[test]
    fn test_summary_counts_levels() {
        let input = vec![
            contribution("alice", "BEGINNER"),
            contribution("bob", "BEGINNER"),
            contribution("carol", "ADVANCED"),
            contribution("dave", "UNKNOWN"),
        ];
        let summary = ContributorsTable::from_contributions(&input).summary();

        assert_eq!(summary.beginner, 2);
        assert_eq!(summary.intermediate, 0);
        assert_eq!(summary.advanced, 1);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(MappingLevel::Beginner), 2);
    }

    #[test]
    fn test_empty() {
        let table = ContributorsTable::from_contributions(&[]);
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
        assert_eq!(table.summary(), ContributorSummary::default());
    }
}
