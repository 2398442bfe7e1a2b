// src/probe/client.rs
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Status and fully-read body of a single GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Issues bare, unauthenticated GET requests.
///
/// No timeout is set, so the client default applies, and idle connections
/// are never pooled: every probe opens its own connection.
#[derive(Debug, Clone)]
pub struct Probe {
    client: Client,
}

impl Probe {
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(ProbeError::Client)?;

        Ok(Self { client })
    }

    pub async fn get(&self, url: &Url) -> Result<ProbeResponse, ProbeError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(ProbeError::Request)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ProbeError::Body)?;

        debug!(status, bytes = body.len(), "GET {} completed", url);

        Ok(ProbeResponse { status, body })
    }
}
