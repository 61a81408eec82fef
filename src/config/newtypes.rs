//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// The default storefront GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.heb.com/graphql";

/// A validated GraphQL endpoint URL.
///
/// # Example
///
/// ```rust
/// use heb_graphql::EndpointUrl;
///
/// let url = EndpointUrl::new("https://www.heb.com/graphql").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "www.heb.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl EndpointUrl {
    /// Creates a new validated endpoint URL.
    ///
    /// Only `http` and `https` schemes are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let invalid = || ConfigError::InvalidEndpointUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() || host.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for EndpointUrl {
    fn default() -> Self {
        let host_start = "https://".len();
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            scheme_end: "https".len(),
            host_start,
            host_end: host_start + "www.heb.com".len(),
        }
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// The storefront session cookie sent with every request.
///
/// The value is opaque: it is obtained outside this crate and passed through
/// verbatim in the `Cookie` header. It is never refreshed or derived.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `SessionCookie(*****)`.
///
/// # Example
///
/// ```rust
/// use heb_graphql::SessionCookie;
///
/// let cookie = SessionCookie::new("sst=abc; sst.sig=def").unwrap();
/// assert_eq!(format!("{:?}", cookie), "SessionCookie(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie(String);

impl SessionCookie {
    /// Creates a new session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySessionCookie`] if the value is blank, or
    /// [`ConfigError::InvalidHeaderValue`] if it contains control characters.
    pub fn new(cookie: impl Into<String>) -> Result<Self, ConfigError> {
        let cookie = cookie.into().trim().to_string();
        if cookie.is_empty() {
            return Err(ConfigError::EmptySessionCookie);
        }
        if cookie.chars().any(char::is_control) {
            return Err(ConfigError::InvalidHeaderValue { header: "Cookie" });
        }
        Ok(Self(cookie))
    }
}

impl AsRef<str> for SessionCookie {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCookie(*****)")
    }
}
