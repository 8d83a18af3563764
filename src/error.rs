//! Error types for the network.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, AnnError>;

#[derive(Error, Debug)]
pub enum AnnError {
    /// A vector or layer did not have the length an operation needs.
    #[error("shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnnError {
    pub(crate) fn shape(context: &'static str, expected: usize, actual: usize) -> AnnError {
        AnnError::ShapeMismatch { context, expected, actual }
    }
}
