/// Synchronous client for the **REST Countries API (v3.1)**.
///
/// This module focuses on the `name/{query}` endpoint and returns the first
/// matching entry as a `models::CountryRecord`.
///
/// ### Notes
/// - The query is interpolated into the path verbatim; whatever escaping happens
///   is done by the URL parser of the transport.
/// - Every failure (transport, non-2xx status, malformed body, empty list) surfaces
///   as a `LookupError`. Nothing is retried.
/// - Network timeouts use a sane default (30s) and can be adjusted by editing the client builder.
///
/// Typical usage:
/// ```no_run
/// # use country_lookup::{Client, CountrySource};
/// let client = Client::default();
/// let pk = client.lookup("pakistan")?;
/// println!("{:?}", pk.common_name());
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::models::CountryRecord;
use log::debug;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Everything that can go wrong while resolving a query.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("decode json: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no country matches {0:?}")]
    NotFound(String),
}

/// Anything able to turn a query into a country record.
///
/// `Client` is the production implementation; tests substitute canned sources.
pub trait CountrySource: Send + Sync {
    fn lookup(&self, query: &str) -> Result<CountryRecord, LookupError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl Client {
    /// Build a client against another API base, e.g. a local test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("country_lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| HttpClient::new());
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// URL queried for `query`.
    pub fn name_url(&self, query: &str) -> String {
        format!("{}/name/{}", self.base_url, query)
    }

    /// Fetch every entry matching `query`.
    ///
    /// ### Errors
    /// - Network/HTTP error
    /// - JSON decoding error (the body must be an array of records)
    pub fn search(&self, query: &str) -> Result<Vec<CountryRecord>, LookupError> {
        let url = self.name_url(query);
        debug!("GET {}", url);
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        let body = resp.bytes()?;
        let records: Vec<CountryRecord> = serde_json::from_slice(&body)?;
        debug!("GET {} -> {} record(s)", url, records.len());
        Ok(records)
    }
}

impl CountrySource for Client {
    /// First entry of `search(query)`; an empty list is `LookupError::NotFound`.
    fn lookup(&self, query: &str) -> Result<CountryRecord, LookupError> {
        self.search(query)?
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NotFound(query.to_string()))
    }
}
