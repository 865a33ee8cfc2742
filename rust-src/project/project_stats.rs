//! `ProjectStats`: one project's records, fetched on first use.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::aggregation::{ContributorsTable, ProgressTable};
use crate::api::{ApiClient, Endpoint, HttpTransport, Transport};
use crate::capability::{require, Capability};
use crate::error::{Result, StatsError};
use crate::models::{ContributionsRecord, ProgressRecord};


/// Statistics for a single Tasking Manager project.
///
/// The metadata record is fetched on construction. Contributions and daily
/// progress are fetched the first time they are needed and kept for the
/// lifetime of the instance; there is no refresh.
pub struct ProjectStats<T: Transport = HttpTransport> {
    project_id: u64,
    client: ApiClient<T>,
    data: Map<String, Value>,
    contributions: Option<Value>,
    progress: Option<Value>,
}


impl ProjectStats<HttpTransport> {
    /// Fetch project metadata over HTTP from `base_url`.
    pub fn fetch(project_id: u64, base_url: &str) -> Result<Self> {
        Self::new(project_id, ApiClient::http(base_url)?)
    }
}


impl<T: Transport> ProjectStats<T> {
    /// Fetch project metadata with the given client.
    pub fn new(project_id: u64, client: ApiClient<T>) -> Result<Self> {
        let data: Map<String, Value> = serde_json::from_value(client.fetch(project_id, Endpoint::Project)?)?;
        info!(project_id, keys = data.len(), "loaded project record");

        Ok(Self {
            project_id,
            client,
            data,
            contributions: None,
            progress: None,
        })
    }

    pub fn project_id(&self) -> u64 {
        self.project_id
    }

    /// The raw project metadata record.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Look up an attribute.
    ///
    /// `"contributions"` and `"progress"` return the lazily fetched records;
    /// any other key is read from the project metadata.
    pub fn get(&mut self, key: &str) -> Result<&Value> {
        match key {
            "contributions" => self.contributions(),
            "progress" => self.progress(),
            _ => self
                .data
                .get(key)
                .ok_or_else(|| StatsError::KeyNotFound(key.to_string())),
        }
    }

    /// The contributions record, fetched on first call.
    pub fn contributions(&mut self) -> Result<&Value> {
        let value = match self.contributions.take() {
            Some(value) => value,
            None => self.client.fetch(self.project_id, Endpoint::Contributions)?,
        };
        Ok(self.contributions.insert(value))
    }

    /// The daily progress record, fetched on first call.
    pub fn progress(&mut self) -> Result<&Value> {
        let value = match self.progress.take() {
            Some(value) => value,
            None => self.client.fetch(self.project_id, Endpoint::Progress)?,
        };
        Ok(self.progress.insert(value))
    }

    /// Daily progress reindexed onto a contiguous date range.
    pub fn get_progress_df(&mut self) -> Result<ProgressTable> {
        require(Capability::Tables)?;

        let record = ProgressRecord::deserialize(self.progress()?)?;
        let table = ProgressTable::from_stats(&record.stats)?;

        debug!(
            project_id = self.project_id,
            source_days = record.stats.len(),
            rows = table.len(),
            "derived progress table"
        );
        Ok(table)
    }

    /// One row per contributor, task lists removed.
    pub fn get_contributors_df(&mut self) -> Result<ContributorsTable> {
        require(Capability::Tables)?;

        let record = ContributionsRecord::deserialize(self.contributions()?)?;
        let table = ContributorsTable::from_contributions(&record.user_contributions);

        debug!(project_id = self.project_id, rows = table.len(), "derived contributors table");
        Ok(table)
    }

    /// Number of tasks in the project, counted from `tasks.features`.
    pub fn total_tasks(&self) -> Result<usize> {
        self.data
            .get("tasks")
            .and_then(|tasks| tasks.get("features"))
            .and_then(Value::as_array)
            .map(Vec::len)
            .ok_or_else(|| StatsError::KeyNotFound("tasks.features".to_string()))
    }

    /// Project name from `projectInfo.name`.
    pub fn name(&self) -> Result<&str> {
        self.data
            .get("projectInfo")
            .and_then(|info| info.get("name"))
            .and_then(Value::as_str)
            .ok_or_else(|| StatsError::KeyNotFound("projectInfo.name".to_string()))
    }
}
