//! Source document retrieval
//!
//! A single blocking HTTP GET against the configured word list URL.
//! One attempt only: any transport, status, or decoding problem aborts
//! the run with a [`FetchError`].

use std::time::Duration;

use crate::error::FetchError;

/// Raw text blob retrieved from the source, prior to any filtering.
///
/// Exists only for the duration of one run; it is split into candidate
/// lines and discarded.
#[derive(Debug, Clone)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// The decoded document content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size of the document in bytes.
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}

/// Blocking HTTP fetcher with a fixed request timeout.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Retrieve the document at `url`.
    ///
    /// The body is decoded strictly as UTF-8; a document that is not
    /// valid UTF-8 is a fetch failure, not something to repair.
    pub fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        let text =
            String::from_utf8(body.to_vec()).map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })?;

        log::debug!("fetched {} bytes from {}", text.len(), url);

        Ok(RawDocument::new(text))
    }
}
