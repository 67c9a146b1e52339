//! Error types for ray tracing.

use thiserror::Error;

/// Errors that can occur outside the per-ray intersect contract.
#[derive(Error, Debug)]
pub enum TraceError {
    /// Crossing enumeration did not terminate within the configured cap.
    #[error("solid produced more than {limit} crossings along one ray")]
    CrossingLimitExceeded {
        /// The cap that was hit.
        limit: usize,
    },

    /// Trace settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Trace settings could not be parsed.
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ray tracing operations.
pub type Result<T> = std::result::Result<T, TraceError>;
