//! Access layer for the Tasking Manager REST API.

mod client;
#[cfg(test)]
pub mod fake;

pub use client::{ApiClient, Endpoint, HttpTransport, Transport};
#[cfg(test)]
pub use client::HttpResponse;
