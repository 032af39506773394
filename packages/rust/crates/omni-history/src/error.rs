//! Error types for omni-history.

use thiserror::Error;

/// Result type for fallible history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors raised while preparing chat history inputs.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Settings document is not valid YAML for [`crate::HistorySettings`].
    #[error("invalid history settings: {0}")]
    InvalidSettings(#[from] serde_yaml::Error),
}
