//! Core error types for twads.

use thiserror::Error;

/// Error type for advertising API operations.
///
/// Every failure the resource clients surface falls into one of four
/// categories. No category is retried or recovered from locally; the
/// client only enriches failures with the account/resource scope they
/// occurred under.
#[derive(Debug, Error)]
pub enum AdsError {
    /// Credentials absent locally or rejected by the remote service.
    #[error("Authorization failed: {message}")]
    Authorization {
        /// Local precondition detail or remote-provided reason.
        message: String,
    },

    /// Referenced account or resource id does not exist.
    #[error("Not found under account {account_id}{}", resource_suffix(.resource_id))]
    NotFound {
        /// Advertising account the lookup was scoped to.
        account_id: String,
        /// Resource id within the account, when the operation named one.
        resource_id: Option<String>,
    },

    /// Payload or query rejected by the remote service's semantics.
    #[error("Validation rejected by remote service: {message}")]
    Validation {
        /// Remote-provided detail where available.
        message: String,
    },

    /// Transport or protocol failure (network fault, 5xx, malformed body).
    #[error("Remote service error: {message}")]
    Remote {
        /// HTTP status code, when the exchange completed.
        status: Option<u16>,
        /// Description of the failure.
        message: String,
    },
}

impl AdsError {
    /// Shorthand for the local missing-credentials precondition failure.
    pub fn missing_credentials() -> Self {
        Self::Authorization {
            message: "delegated credentials are not configured".to_string(),
        }
    }

    /// Returns true if a caller could reasonably retry the operation.
    ///
    /// This client never retries internally; the hint is for callers
    /// that own retry policy.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Remote { status, .. } => {
                status.is_none_or(|s| s >= 500 || s == 429)
            }
            _ => false,
        }
    }
}

fn resource_suffix(resource_id: &Option<String>) -> String {
    match resource_id {
        Some(id) => format!(": {id}"),
        None => String::new(),
    }
}

/// Result type for advertising API operations.
pub type AdsResult<T> = Result<T, AdsError>;
