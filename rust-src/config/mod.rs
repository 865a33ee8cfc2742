//! Configuration and settings for hotstats.

mod settings;

pub use settings::{
    default_chart_path,
    preview_chart_path,
    DEFAULT_API_URL,
    DEFAULT_PROJECT_ID,
    API_URL_ENV,
};
