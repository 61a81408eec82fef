//! Query-construction error types.

use thiserror::Error;

/// Error returned when query parameters fail validation.
///
/// Parameters are checked when they are constructed, so a built
/// [`GraphqlDocument`](crate::queries::GraphqlDocument) is always well formed.
///
/// # Example
///
/// ```rust
/// use heb_graphql::queries::{QueryError, StoreSearchParams};
///
/// let result = StoreSearchParams::new("1803 West Bronze St, Pharr, TX", 0, vec![]);
/// assert!(matches!(
///     result,
///     Err(QueryError::InvalidParameter { name: "radiusMiles", .. })
/// ));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A parameter value is not acceptable.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The GraphQL argument name of the parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl QueryError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message_names_the_argument() {
        let error = QueryError::invalid("categoryId", "must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'categoryId': must not be empty"
        );
    }
}
