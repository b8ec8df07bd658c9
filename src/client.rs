//! Search endpoint client.
//!
//! The server accepts the raw query as a `text/plain` POST body and answers
//! with a JSON array of `[path, rank]` pairs.

use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::{LookupError, Result};
use crate::model::{ResultSet, parse_result_set};

/// Route of the search API on the server.
pub const SEARCH_PATH: &str = "/api/search";

/// Anything that can answer a query with a result set.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(&self, query: &str) -> impl Future<Output = Result<ResultSet>> + Send;
}

/// Client for the HTTP search endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    /// Create a client for the server at `base_url`.
    ///
    /// With no timeout a request that never answers stays pending forever.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| LookupError::Config(format!("search http client: {err}")))?;
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url),
        })
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(LookupError::Config(
                "server base_url is empty; set [server].base_url".to_string(),
            ));
        }
        Self::new(&config.base_url, config.timeout())
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for HttpBackend {
    async fn search(&self, query: &str) -> Result<ResultSet> {
        debug!(endpoint = %self.endpoint, query_len = query.len(), "posting search");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain")
            .body(query.to_owned())
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        parse_result_set(&body).map_err(LookupError::from)
    }
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}{SEARCH_PATH}", base_url.trim_end_matches('/'))
}
