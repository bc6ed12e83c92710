//! Error types for docs2md

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching pages or OpenAPI specs
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL has invalid scheme
    #[error("Invalid URL: must start with http:// or https://")]
    InvalidUrlScheme,

    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// Request timed out
    #[error("Failed to fetch page {url}: request timed out")]
    Timeout { url: String },

    /// Failed to connect to server
    #[error("Failed to fetch page {url}: could not connect: {source}")]
    ConnectError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Failed to fetch page {url}: HTTP error status {status}")]
    HttpStatus { url: String, status: u16 },

    /// Other request error
    #[error("Failed to fetch page {url}: {message}")]
    RequestError { url: String, message: String },

    /// No candidate OpenAPI location answered successfully
    #[error("OpenAPI spec not found for {api}")]
    OpenApiNotFound { api: String },
}

impl FetchError {
    /// Create an error from a reqwest error, keeping the failing URL
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else if err.is_connect() {
            FetchError::ConnectError {
                url: url.to_string(),
                source: err,
            }
        } else {
            FetchError::RequestError {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

/// Errors raised while writing output files
#[derive(Debug, Error)]
pub enum StorageError {
    /// Parent directory could not be created
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be written
    #[error("Failed to save file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for a scraping run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}
