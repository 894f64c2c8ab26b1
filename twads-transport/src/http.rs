//! HTTP transport with tracing and credential handling.
//!
//! The [`Transport`] trait is the seam between the resource clients and the
//! network. [`HttpTransport`] is the reqwest-backed implementation; tests
//! substitute doubles behind the same trait.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, instrument};
use url::Url;

use crate::config::TransportConfig;
use crate::error::TransportError;

/// User agent string for twads.
const USER_AGENT: &str = concat!("twads/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Transport Contract
// ============================================================================

/// A completed HTTP exchange, regardless of status code.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx status codes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Authenticated HTTP transport consumed by the resource clients.
///
/// Paths are relative to the configured API base URL. Query and form
/// parameters are ordered multi-valued sets forwarded as-is. Implementors
/// return [`RawResponse`] for any completed exchange and [`TransportError`]
/// only for network-level faults; they perform no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET request with query parameters.
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<RawResponse, TransportError>;

    /// Performs a POST request with a form-encoded body.
    async fn post(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<RawResponse, TransportError>;

    /// Performs a PUT request with a form-encoded body.
    async fn put(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<RawResponse, TransportError>;

    /// Performs a DELETE request.
    async fn delete(&self, path: &str) -> Result<RawResponse, TransportError>;

    /// Returns true if delegated credentials are present.
    ///
    /// Resource clients consult this before any dispatch so that missing
    /// credentials fail locally without a network round trip.
    fn is_authorized(&self) -> bool;
}

// ============================================================================
// HTTP Transport
// ============================================================================

/// reqwest-backed [`Transport`] implementation.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpTransport {
    /// Creates a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Http` if the underlying HTTP client cannot
    /// be built, which indicates a broken TLS configuration.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        })
    }

    /// Resolves a relative path against the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| TransportError::InvalidUrl(e.to_string()))
    }

    async fn dispatch(&self, request: RequestBuilder) -> Result<RawResponse, TransportError> {
        let request = match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        debug!(status, "Response received");

        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, query), fields(path = %path))]
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        let url = self.endpoint(path)?;
        debug!("GET request");

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.dispatch(request).await
    }

    #[instrument(skip(self, form), fields(path = %path))]
    async fn post(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        let url = self.endpoint(path)?;
        debug!("POST request");

        self.dispatch(self.http.post(url).form(form)).await
    }

    #[instrument(skip(self, form), fields(path = %path))]
    async fn put(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<RawResponse, TransportError> {
        let url = self.endpoint(path)?;
        debug!("PUT request");

        self.dispatch(self.http.put(url).form(form)).await
    }

    #[instrument(skip(self), fields(path = %path))]
    async fn delete(&self, path: &str) -> Result<RawResponse, TransportError> {
        let url = self.endpoint(path)?;
        debug!("DELETE request");

        self.dispatch(self.http.delete(url)).await
    }

    fn is_authorized(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================
