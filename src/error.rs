//! Error types for ASG lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Result type used across the crate.
pub type AsgResult<T> = std::result::Result<T, AsgError>;

/// Errors that abort a lookup run (or a single subscription when continuing on error).
#[derive(Error, Debug)]
pub enum AsgError {
    /// Credential acquisition failed before any listing was attempted.
    #[error("Failed to obtain a credential: {0}")]
    AuthFailure(String),

    /// A page of a paginated listing could not be fetched.
    #[error("Failed to get page {page} of {listing}: {source}")]
    ListingFailed {
        /// What was being listed, e.g. "subscriptions".
        listing: String,
        /// Zero based index of the page that failed.
        page: usize,
        #[source]
        source: TransportError,
    },

    /// A resource id too short to carry a resource group segment.
    #[error("Malformed resource id '{id}': expected at least 5 '/' separated segments")]
    MalformedRecord { id: String },

    /// Directory creation or file write failed.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Target path exists but is not a directory.
    #[error("Path exists but is not a directory: {0}")]
    DirectoryConflict(PathBuf),

    /// Invalid runtime configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AsgError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AsgError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failures while fetching a single page from the ARM API.
#[derive(Error, Debug)]
pub enum TransportError {
    /// No bearer token could be obtained for the request.
    #[error("token request failed: {0}")]
    Token(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// ARM answered with a non success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected page shape.
    #[error("error parsing response at path={path}: {message}")]
    Decode { path: String, message: String },

    /// The next link did not advance, the listing would never end.
    #[error("next link not unique, possible infinite loop: {0}")]
    RepeatedNextLink(String),
}
