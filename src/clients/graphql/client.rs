//! GraphQL client implementation for the storefront endpoint.

use crate::clients::graphql::GraphqlEnvelope;
use crate::clients::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::clients::ClientError;
use crate::config::HebConfig;
use crate::queries::GraphqlDocument;

/// Content type sent with every request.
pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// GraphQL client for the storefront endpoint.
///
/// Owns the static configuration and the [`Transport`]. Each call to
/// [`execute`](Self::execute) makes exactly one POST; there is no retry,
/// caching or backoff.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync` and read-only after construction, so it
/// can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use heb_graphql::{GraphqlClient, HebConfig, SessionCookie};
/// use heb_graphql::queries::{build_store_search_query, StoreSearchParams};
///
/// let config = HebConfig::builder()
///     .session_cookie(SessionCookie::new("sst=...").unwrap())
///     .build()
///     .unwrap();
/// let client = GraphqlClient::new(config)?;
///
/// let document = build_store_search_query(&StoreSearchParams::default());
/// let envelope = client.execute(&document).await?;
/// ```
#[derive(Debug)]
pub struct GraphqlClient<T = ReqwestTransport> {
    transport: T,
    config: HebConfig,
    default_headers: Vec<(String, String)>,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient<ReqwestTransport> {
    /// Creates a client that talks to the configured endpoint over `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: HebConfig) -> Result<Self, ClientError> {
        Ok(Self::with_transport(config, ReqwestTransport::new()?))
    }
}

impl<T: Transport> GraphqlClient<T> {
    /// Creates a client with a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: HebConfig, transport: T) -> Self {
        let default_headers = vec![
            ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            ("User-Agent".to_string(), config.user_agent().to_string()),
            ("Connection".to_string(), "close".to_string()),
            (
                "Cookie".to_string(),
                config.session_cookie().as_ref().to_string(),
            ),
        ];

        Self {
            transport,
            config,
            default_headers,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &HebConfig {
        &self.config
    }

    /// Returns the headers sent with every request, in send order.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Executes `document` and returns the decoded envelope.
    ///
    /// The request body is `{"query": <text>, "variables": <object>}`.
    /// A 200 response whose body contains GraphQL `errors` is still a
    /// success; the errors are logged and left in the envelope.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`]: no HTTP response was received
    /// - [`ClientError::Http`]: any status other than 200
    /// - [`ClientError::Decode`]: a 200 response whose body is not JSON
    pub async fn execute(&self, document: &GraphqlDocument) -> Result<GraphqlEnvelope, ClientError> {
        let request = TransportRequest {
            url: self.config.endpoint().to_string(),
            headers: self.default_headers.clone(),
            body: document.to_body().to_string(),
        };

        tracing::debug!(
            operation = document.operation_name(),
            endpoint = %self.config.endpoint(),
            "Sending GraphQL request"
        );

        let response = self.transport.post(request).await?;

        if response.status != 200 {
            tracing::debug!(
                operation = document.operation_name(),
                status = response.status,
                "GraphQL request failed"
            );
            return Err(ClientError::Http {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: GraphqlEnvelope =
            serde_json::from_str(&response.body).map_err(ClientError::Decode)?;

        for error in envelope.errors() {
            tracing::warn!(
                operation = document.operation_name(),
                "GraphQL error in response: {}",
                error
            );
        }

        Ok(envelope)
    }
}
