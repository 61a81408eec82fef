//! Projection error types.

use thiserror::Error;

/// Error returned when a response does not have the expected shape.
///
/// A response without `data` is not an error; it projects to
/// [`Projected::NoData`](crate::projection::Projected::NoData).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// A required field is absent, `null`, or has the wrong type.
    #[error("Malformed response: missing or invalid field '{path}'")]
    MalformedResponse {
        /// Dotted path of the field, with array indices (e.g. `data.x.stores[0].store.name`).
        path: String,
    },
}

impl ProjectionError {
    pub(crate) fn malformed(path: impl Into<String>) -> Self {
        Self::MalformedResponse { path: path.into() }
    }
}
