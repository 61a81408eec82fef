//! The decoded GraphQL response envelope.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The raw decoded response body: `{"data": ...}` and/or `{"errors": [...]}`.
///
/// The JSON is kept verbatim so it can be persisted without loss.
/// Serialization is transparent: an envelope serializes exactly as the
/// JSON it wraps.
///
/// # Example
///
/// ```rust
/// use heb_graphql::clients::GraphqlEnvelope;
/// use serde_json::json;
///
/// let envelope = GraphqlEnvelope::new(json!({"errors": [{"message": "boom"}]}));
/// assert!(envelope.data().is_none());
/// assert_eq!(envelope.errors()[0].message, "boom");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphqlEnvelope(Value);

impl GraphqlEnvelope {
    /// Wraps a decoded JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the `data` member, treating `null` as absent.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data").filter(|data| !data.is_null())
    }

    /// Returns the GraphQL errors carried by the envelope.
    ///
    /// Entries without a string `message` are rendered as compact JSON.
    #[must_use]
    pub fn errors(&self) -> Vec<GraphqlErrorMessage> {
        self.0
            .get("errors")
            .and_then(Value::as_array)
            .map(|errors| errors.iter().map(GraphqlErrorMessage::from_value).collect())
            .unwrap_or_default()
    }

    /// Returns the wrapped JSON.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the envelope, returning the wrapped JSON.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for GraphqlEnvelope {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// One entry of the envelope's `errors` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphqlErrorMessage {
    /// The error message.
    pub message: String,
    /// The response path the error applies to, dot-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl GraphqlErrorMessage {
    fn from_value(value: &Value) -> Self {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| value.to_string(), str::to_string);

        let path = value.get("path").and_then(Value::as_array).map(|segments| {
            segments
                .iter()
                .map(|segment| match segment {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(".")
        });

        Self { message, path }
    }
}

impl fmt::Display for GraphqlErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} (at {path})", self.message),
            None => f.write_str(&self.message),
        }
    }
}
