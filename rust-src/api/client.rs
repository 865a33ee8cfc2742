//! Blocking HTTP client for the three project statistics resources.

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Result, StatsError};


/// Raw response handed back by a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}


/// Anything able to perform an unauthenticated GET.
pub trait Transport {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}


/// Production transport backed by `reqwest::blocking`.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}


impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("hotstats/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}


impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}


/// Project resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Project,
    Contributions,
    Progress,
}


impl Endpoint {
    /// Path of this resource for the given project, relative to the base URL.
    pub fn path(self, project_id: u64) -> String {
        match self {
            Endpoint::Project => format!("/api/v2/projects/{project_id}/"),
            Endpoint::Contributions => format!("/api/v2/projects/{project_id}/contributions/"),
            Endpoint::Progress => format!("/api/v2/projects/{project_id}/contributions/queries/day/"),
        }
    }
}


/// Fetches project resources as JSON. No retries; any non-200 is fatal.
pub struct ApiClient<T: Transport = HttpTransport> {
    base_url: String,
    transport: T,
}


impl ApiClient<HttpTransport> {
    /// Client against `base_url` using the blocking HTTP transport.
    pub fn http(base_url: &str) -> Result<Self> {
        Ok(Self::new(base_url, HttpTransport::new()?))
    }
}


impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn url(&self, project_id: u64, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path(project_id))
    }

    /// GET one resource and decode its JSON body.
    pub fn fetch(&self, project_id: u64, endpoint: Endpoint) -> Result<Value> {
        let url = self.url(project_id, endpoint);
        info!(project_id, ?endpoint, "fetching project resource");

        let response = self.transport.get(&url)?;
        if response.status != 200 {
            return Err(StatsError::Fetch {
                project_id,
                url,
                status: response.status,
            });
        }

        debug!(project_id, ?endpoint, bytes = response.body.len(), "resource fetched");
        Ok(serde_json::from_str(&response.body)?)
    }
}
