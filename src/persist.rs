//! Saving and loading raw response envelopes.
//!
//! Envelopes are written as pretty-printed JSON (two-space indent) with the
//! key order of the response. Loading a saved file yields an envelope equal to the
//! one that was saved.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::clients::GraphqlEnvelope;

/// Default file for the raw category browse response.
pub const CATEGORY_RESPONSE_FILE: &str = "heb_category_response.json";

/// Default file for the raw store search response.
pub const STORES_RESPONSE_FILE: &str = "heb_stores_response.json";

/// Errors raised while saving or loading an envelope.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file could not be read or written.
    #[error("Failed to access '{path}': {source}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file does not contain valid JSON.
    #[error("Failed to parse '{path}': {source}")]
    Json {
        /// The file involved.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Writes `envelope` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if the file cannot be written.
pub fn save_envelope(path: impl AsRef<Path>, envelope: &GraphqlEnvelope) -> Result<(), PersistError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(envelope).map_err(|source| PersistError::Json {
        path: path.display().to_string(),
        source,
    })?;

    fs::write(path, json).map_err(|source| PersistError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "Saved raw response");
    Ok(())
}

/// Reads an envelope previously written by [`save_envelope`].
///
/// # Errors
///
/// Returns [`PersistError::Io`] if the file cannot be read, or
/// [`PersistError::Json`] if it is not valid JSON.
pub fn load_envelope(path: impl AsRef<Path>) -> Result<GraphqlEnvelope, PersistError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| PersistError::Json {
        path: path.display().to_string(),
        source,
    })
}
