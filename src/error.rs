//! Error taxonomy for the fetch-and-build run
//!
//! Two terminal failure classes: retrieving the source document and
//! writing the output file. Either one aborts the run; there are no
//! retries and no fallback sources.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while retrieving the source word list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response (DNS, connect,
    /// timeout, broken transfer).
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body is not valid UTF-8 text.
    #[error("response body from {url} is not valid UTF-8")]
    Decode {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Failure while persisting the output wordlist.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write wordlist to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fully written temporary file could not be moved over the
    /// destination.
    #[error("failed to move temporary file into place at {path:?}")]
    Rename {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}
