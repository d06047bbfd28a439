use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::types::{Summary, Term};

/// Body text used when the service responds without an extract field.
const NO_SUMMARY_FALLBACK: &str = "No summary found.";

const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const DEFAULT_TIMEOUT_MS: u64 = 4_000;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("summary service returned status {0}")]
    Status(StatusCode),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint URL cannot carry path segments")]
    InvalidEndpoint,
}

/// Where and how to reach the summary service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL; the looked-up term is appended as one path segment.
    pub endpoint: Url,
    /// Upper bound on a single lookup, transport included. A hung request
    /// fails here instead of stalling the fallback forever.
    pub request_timeout_ms: u64,
}

impl LookupConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint parses"),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Remote lookup seam; the resolver depends on this, not on HTTP.
#[async_trait]
pub trait RemoteLookup: Send + Sync {
    async fn lookup(&self, term: &Term) -> Result<Summary, FetchError>;
}

/// JSON shape of the service response; only `extract` matters here.
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    extract: Option<String>,
}

/// HTTP client for the summary service.
///
/// One attempt per lookup: any transport fault or non-2xx status is
/// propagated as [`FetchError`], never mapped to a default value.
#[derive(Debug, Clone)]
pub struct RemoteSummaryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RemoteSummaryClient {
    pub fn new(config: LookupConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(RemoteSummaryClient {
            http,
            endpoint: config.endpoint,
        })
    }

    /// Endpoint with the term appended as one percent-encoded path segment.
    fn term_url(&self, term: &Term) -> Result<Url, FetchError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidEndpoint)?
            .pop_if_empty()
            .push(term.as_str());
        Ok(url)
    }
}

#[async_trait]
impl RemoteLookup for RemoteSummaryClient {
    async fn lookup(&self, term: &Term) -> Result<Summary, FetchError> {
        let url = self.term_url(term)?;
        debug!(%url, "requesting remote summary");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let payload: SummaryPayload = response.json().await?;
        let extract = payload
            .extract
            .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string());

        Ok(Summary::remote(first_sentence(&extract)))
    }
}

/// Everything before the first period, with the period restored. The split is
/// on `.` specifically; `!` and `?` pass through untouched.
fn first_sentence(extract: &str) -> String {
    let head = extract.split('.').next().unwrap_or_default();
    format!("{head}.")
}
