//! HTTP suggestion source.
//!
//! Issues `GET {base_url}?{query_param}={word}&max={n}` and accepts either a
//! JSON array of strings or an array of objects carrying a `word` field.

use std::time::Duration;

use serde::Deserialize;

use super::SuggestionFetcher;
use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Connection settings for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    /// Endpoint URL (e.g. `https://api.datamuse.com/sug`).
    pub base_url: String,
    /// Name of the query parameter carrying the word.
    pub query_param: String,
    /// Upper bound on returned candidates.
    pub max_results: usize,
    pub timeout: Duration,
}

impl From<&ApiConfig> for HttpFetcherConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.clone(),
            query_param: api.query_param.clone(),
            max_results: api.max_results,
            timeout: Duration::from_millis(api.timeout_ms),
        }
    }
}

/// One element of the response array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Entry {
    Plain(String),
    Scored { word: String },
}

impl Entry {
    fn into_word(self) -> String {
        match self {
            Self::Plain(w) | Self::Scored { word: w } => w,
        }
    }
}

/// Suggestion source backed by a remote word API.
#[derive(Debug)]
pub struct HttpFetcher {
    http: reqwest::Client,
    base: reqwest::Url,
    query_param: String,
    max_results: usize,
}

impl HttpFetcher {
    pub fn new(config: &HttpFetcherConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(Error::Config("api base_url is empty".into()));
        }
        if config.query_param.is_empty() {
            return Err(Error::Config("api query_param is empty".into()));
        }
        let base = reqwest::Url::parse(&config.base_url)
            .map_err(|e| Error::Config(format!("invalid api base_url {}: {e}", config.base_url)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported api scheme: {}",
                base.scheme()
            )));
        }

        // reqwest is built with rustls-no-provider; `Err` means already installed.
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base,
            query_param: config.query_param.clone(),
            max_results: config.max_results,
        })
    }

    /// Build the request URL for `word`.
    pub(crate) fn url_for(&self, word: &str) -> reqwest::Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(&self.query_param, word)
            .append_pair("max", &self.max_results.to_string());
        url
    }

    /// Check HTTP response status, returning error for non-success codes.
    fn check_status(resp: &reqwest::Response) -> Result<()> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").into(),
            });
        }
        Ok(())
    }

    /// Decode a response body into at most `max_results` words.
    pub(crate) fn parse_body(body: &str, max_results: usize) -> Result<Vec<String>> {
        let entries: Vec<Entry> = serde_json::from_str(body)?;
        Ok(entries
            .into_iter()
            .map(Entry::into_word)
            .filter(|w| !w.is_empty())
            .take(max_results)
            .collect())
    }
}

impl SuggestionFetcher for HttpFetcher {
    async fn fetch(&self, word: &str) -> Result<Vec<String>> {
        let url = self.url_for(word);
        tracing::debug!(%url, "Fetching suggestions");
        let resp = self.http.get(url).send().await?;
        Self::check_status(&resp)?;
        let body = resp.text().await?;
        Self::parse_body(&body, self.max_results)
    }
}
