//! Canned API payloads shared by project tests.

use serde_json::{json, Value};

use crate::api::fake::FakeTransport;
use crate::api::ApiClient;

use super::ProjectStats;


pub const BASE_URL: &str = "http://tm.test";
pub const PROJECT_ID: u64 = 9507;
pub const TOTAL_TASKS: usize = 12;


pub fn project_json() -> Value {
    let features: Vec<Value> = (0..TOTAL_TASKS)
        .map(|i| json!({"type": "Feature", "properties": {"taskId": i + 1}}))
        .collect();

    json!({
        "projectId": PROJECT_ID,
        "percentMapped": 64,
        "percentValidated": 31,
        "created": "2020-11-02T08:15:42.133631Z",
        "projectInfo": {"name": "Flood mapping: Lower Shire"},
        "tasks": {"type": "FeatureCollection", "features": features}
    })
}


pub fn contributions_json() -> Value {
    json!({
        "userContributions": [
            {"username": "ada", "mappingLevel": "BEGINNER", "mapped": 3, "validated": 0, "total": 3,
             "mappedTasks": [1, 2, 3], "validatedTasks": []},
            {"username": "bo", "mappingLevel": "INTERMEDIATE", "mapped": 4, "validated": 1, "total": 5,
             "mappedTasks": [4, 5, 6, 7], "validatedTasks": [1]},
            {"username": "cy", "mappingLevel": "ADVANCED", "mapped": 1, "validated": 3, "total": 4,
             "mappedTasks": [8], "validatedTasks": [2, 3, 4]}
        ]
    })
}


/// Ten calendar days, 2020-11-02 to 2020-11-11, with 2020-11-06 missing.
pub fn progress_json() -> Value {
    let days = [
        ("2020-11-02", 2, 0),
        ("2020-11-03", 1, 0),
        ("2020-11-04", 0, 1),
        ("2020-11-05", 2, 1),
        ("2020-11-07", 1, 0),
        ("2020-11-08", 0, 1),
        ("2020-11-09", 1, 0),
        ("2020-11-10", 0, 1),
        ("2020-11-11", 1, 0),
    ];

    let mut cumulative_mapped = 0;
    let mut cumulative_validated = 0;
    let stats: Vec<Value> = days
        .iter()
        .map(|(date, mapped, validated)| {
            cumulative_mapped += mapped;
            cumulative_validated += validated;
            json!({
                "date": date,
                "mapped": mapped,
                "validated": validated,
                "cumulative_mapped": cumulative_mapped,
                "cumulative_validated": cumulative_validated,
                "total_tasks": TOTAL_TASKS
            })
        })
        .collect();

    json!({ "stats": stats })
}


/// Transport answering all three endpoints for [`PROJECT_ID`].
pub fn transport() -> FakeTransport {
    let root = format!("{BASE_URL}/api/v2/projects/{PROJECT_ID}");
    FakeTransport::new()
        .respond(&format!("{root}/"), 200, &project_json().to_string())
        .respond(&format!("{root}/contributions/"), 200, &contributions_json().to_string())
        .respond(
            &format!("{root}/contributions/queries/day/"),
            200,
            &progress_json().to_string(),
        )
}


pub fn project_stats() -> ProjectStats<FakeTransport> {
    match ProjectStats::new(PROJECT_ID, ApiClient::new(BASE_URL, transport())) {
        Ok(stats) => stats,
        Err(e) => panic!("fixture project failed to load: {e}"),
    }
}
