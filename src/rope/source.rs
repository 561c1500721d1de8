//! Reading raw translation text and the Bible index.
//!
//! Everything here is blocking: translations are fetched one after another on
//! the calling thread. Each response or file handle is owned by the call that
//! reads it, so it is released as soon as the body is in memory, on error paths
//! too.

use std::fmt;
use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::rope::config::NetworkSettings;
use crate::rope::index::{parse_index, IndexEntry};

/// Where a translation's raw text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceLocation::Url(url) => write!(f, "{}", url),
            SourceLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: StatusCode },

    #[error("could not read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("could not read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl FetchError {
    /// A short explanation for the console, when one helps.
    pub fn hint(&self) -> Option<&'static str> {
        let source = match self {
            FetchError::Transport { source, .. } | FetchError::Body { source, .. } => source,
            FetchError::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
                return Some("The index may list a translation that has moved.")
            }
            _ => return None,
        };

        Some(if source.is_timeout() {
            "The request timed out. Raise network.timeout_secs or try again later."
        } else if source.is_connect() || source.is_request() {
            "Connection error. Please check your internet connection and try again."
        } else if source.is_decode() || source.is_body() {
            "Received an unexpected response from the server."
        } else {
            "A network error occurred. Please try again later."
        })
    }
}

/// Reads translation text from URLs and files with one shared HTTP client.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(settings: &NetworkSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(concat!("bible-rope/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Read the whole text at `location`.
    pub fn fetch_text(&self, location: &SourceLocation) -> Result<String, FetchError> {
        match location {
            SourceLocation::Url(url) => self.get(url),
            SourceLocation::File(path) => {
                debug!(path = %path.display(), "reading translation file");
                let bytes = std::fs::read(path).map_err(|source| FetchError::File {
                    path: path.clone(),
                    source,
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }

    /// Download and parse the `title = url` index.
    pub fn fetch_index(&self, url: &str) -> Result<Vec<IndexEntry>, FetchError> {
        let body = self.get(url)?;
        let entries = parse_index(&body);
        debug!(url, entries = entries.len(), "parsed bible index");
        Ok(entries)
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}
