//! Transport error types.

use thiserror::Error;
use twads_core::AdsError;

/// Error type for transport-level failures.
///
/// Covers only network-level faults; completed HTTP exchanges are returned
/// as [`crate::RawResponse`] regardless of status code, and status-to-error
/// mapping happens in the resource clients.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl TransportError {
    /// Converts into the caller-facing error taxonomy.
    ///
    /// Network-level faults carry no HTTP status; they surface as generic
    /// remote service errors the caller may choose to retry.
    #[must_use]
    pub fn into_ads(self) -> AdsError {
        AdsError::Remote {
            status: None,
            message: self.to_string(),
        }
    }
}
