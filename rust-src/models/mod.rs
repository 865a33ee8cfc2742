//! Payload models for the project statistics API.

mod records;

pub use records::{ContributionsRecord, MappingLevel, ProgressDay, ProgressRecord};
