//! Error types for neurobreed_core.
//!
//! Every failure in the evaluation and breeding engine is structural: two
//! index-aligned sequences disagree in length. Such failures are
//! deterministic, so callers never need to retry.

use thiserror::Error;

/// Main error type for network evaluation and breeding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkError {
    /// A supplied sequence has a different length than required.
    #[error("Number of inputs differs from expectation. Expected {expected}, but received {actual}.")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type alias for neurobreed_core operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

impl NetworkError {
    /// Creates a new dimension mismatch error.
    #[must_use]
    pub fn mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}

/// Fails with [`NetworkError::DimensionMismatch`] unless `actual == expected`.
pub fn ensure_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::mismatch(expected, actual))
    }
}
