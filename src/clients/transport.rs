//! The HTTP execution primitive used by the GraphQL client.
//!
//! [`Transport`] is the seam between the client and the network: a single
//! `POST(url, headers, body) -> (status, body)` call. [`ReqwestTransport`] is
//! the production implementation; tests substitute their own.

use async_trait::async_trait;

use crate::clients::errors::TransportError;

/// An outbound HTTP POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// Absolute URL to post to.
    pub url: String,
    /// Headers in send order. Values are passed through verbatim.
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: String,
}

impl TransportRequest {
    /// Returns the first header with the given name, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A complete HTTP response. The body has been fully read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

/// Sends a single HTTP POST and returns the complete response.
///
/// Implementations must not retry; the client relies on one call per request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no HTTP response was received.
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest` with rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a fresh `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self.client.post(&request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.body(request.body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
