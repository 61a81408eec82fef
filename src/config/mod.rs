//! Configuration types for the H-E-B GraphQL client.
//!
//! # Overview
//!
//! - [`HebConfig`]: endpoint, user agent, and session cookie used by every request
//! - [`HebConfigBuilder`]: a builder for constructing [`HebConfig`] instances
//! - [`EndpointUrl`]: a validated endpoint URL
//! - [`SessionCookie`]: an opaque session cookie with masked debug output
//!
//! Configuration is built once and is read-only afterwards. Credentials are
//! injected by the caller, either through the builder or from the process
//! environment with [`HebConfig::from_env`].
//!
//! # Example
//!
//! ```rust
//! use heb_graphql::{HebConfig, SessionCookie};
//!
//! let config = HebConfig::builder()
//!     .session_cookie(SessionCookie::new("sst=abc").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://www.heb.com/graphql");
//! ```

mod newtypes;

pub use newtypes::{EndpointUrl, SessionCookie, DEFAULT_ENDPOINT};

use crate::error::ConfigError;

/// Crate version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the endpoint URL override.
pub const ENDPOINT_ENV: &str = "HEB_GRAPHQL_ENDPOINT";

/// Environment variable holding the session cookie.
pub const SESSION_COOKIE_ENV: &str = "HEB_SESSION_COOKIE";

/// Environment variable holding the user agent override.
pub const USER_AGENT_ENV: &str = "HEB_USER_AGENT";

/// Returns the user agent sent when none is configured.
#[must_use]
pub fn default_user_agent() -> String {
    let rust_version = env!("CARGO_PKG_RUST_VERSION");
    format!("HEB GraphQL Client v{CLIENT_VERSION} | Rust {rust_version}")
}

/// Static configuration for the storefront client.
///
/// # Thread Safety
///
/// `HebConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct HebConfig {
    endpoint: EndpointUrl,
    user_agent: String,
    session_cookie: SessionCookie,
}

impl HebConfig {
    /// Creates a new builder for constructing a `HebConfig`.
    #[must_use]
    pub fn builder() -> HebConfigBuilder {
        HebConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `HEB_SESSION_COOKIE` (required), `HEB_GRAPHQL_ENDPOINT` and
    /// `HEB_USER_AGENT` (both optional).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when the cookie variable is not
    /// set, or any validation error for the values that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let cookie = lookup(SESSION_COOKIE_ENV).ok_or(ConfigError::MissingEnvVar {
            name: SESSION_COOKIE_ENV,
        })?;

        let mut builder = Self::builder().session_cookie(SessionCookie::new(cookie)?);
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            builder = builder.endpoint(EndpointUrl::new(endpoint)?);
        }
        if let Some(user_agent) = lookup(USER_AGENT_ENV).filter(|v| !v.trim().is_empty()) {
            builder = builder.user_agent(user_agent);
        }
        builder.build()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the user agent sent with each request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the session cookie.
    #[must_use]
    pub const fn session_cookie(&self) -> &SessionCookie {
        &self.session_cookie
    }
}

// Verify HebConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HebConfig>();
};

/// Builder for constructing [`HebConfig`] instances.
///
/// `session_cookie` is required.
///
/// # Defaults
///
/// - `endpoint`: [`DEFAULT_ENDPOINT`]
/// - `user_agent`: [`default_user_agent`]
#[derive(Debug, Default)]
pub struct HebConfigBuilder {
    endpoint: Option<EndpointUrl>,
    user_agent: Option<String>,
    session_cookie: Option<SessionCookie>,
}

impl HebConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the session cookie (required).
    #[must_use]
    pub fn session_cookie(mut self, cookie: SessionCookie) -> Self {
        self.session_cookie = Some(cookie);
        self
    }

    /// Builds the [`HebConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `session_cookie` is not
    /// set, or [`ConfigError::InvalidHeaderValue`] if the user agent contains
    /// control characters.
    pub fn build(self) -> Result<HebConfig, ConfigError> {
        let session_cookie = self
            .session_cookie
            .ok_or(ConfigError::MissingRequiredField {
                field: "session_cookie",
            })?;

        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);
        if user_agent.chars().any(char::is_control) {
            return Err(ConfigError::InvalidHeaderValue {
                header: "User-Agent",
            });
        }

        Ok(HebConfig {
            endpoint: self.endpoint.unwrap_or_default(),
            user_agent,
            session_cookie,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_builder_requires_session_cookie() {
        let result = HebConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "session_cookie"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = HebConfig::builder()
            .session_cookie(SessionCookie::new("sst=abc").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.endpoint().as_ref(), DEFAULT_ENDPOINT);
        assert!(config.user_agent().starts_with("HEB GraphQL Client v"));
        assert_eq!(config.session_cookie().as_ref(), "sst=abc");
    }

    #[test]
    fn test_builder_rejects_user_agent_with_newline() {
        let result = HebConfig::builder()
            .session_cookie(SessionCookie::new("sst=abc").unwrap())
            .user_agent("agent\nX-Other: 1")
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeaderValue {
                header: "User-Agent"
            })
        ));
    }

    #[test]
    fn test_from_lookup_requires_cookie() {
        let result = HebConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar {
                name: SESSION_COOKIE_ENV
            })
        ));
    }

    #[test]
    fn test_from_lookup_applies_overrides() {
        let config = HebConfig::from_lookup(lookup_from(&[
            (SESSION_COOKIE_ENV, "sst=abc"),
            (ENDPOINT_ENV, "http://localhost:4000/graphql"),
            (USER_AGENT_ENV, "RapidAPI/4.2.8"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint().as_ref(), "http://localhost:4000/graphql");
        assert_eq!(config.user_agent(), "RapidAPI/4.2.8");
    }

    #[test]
    fn test_from_lookup_ignores_blank_optionals() {
        let config = HebConfig::from_lookup(lookup_from(&[
            (SESSION_COOKIE_ENV, "sst=abc"),
            (ENDPOINT_ENV, " "),
        ]))
        .unwrap();

        assert_eq!(config.endpoint().as_ref(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_config_debug_does_not_leak_cookie() {
        let config = HebConfig::builder()
            .session_cookie(SessionCookie::new("sst=super-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("HebConfig"));
        assert!(!debug_str.contains("super-secret"));
    }
}
