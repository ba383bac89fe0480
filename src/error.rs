//! Error types
//!
//! All failures of the estimator surface as a [`BodyFatError`].

use thiserror::Error;

/// Body fat estimation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyFatError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),
}

/// Result type for body fat operations
pub type BodyFatResult<T> = Result<T, BodyFatError>;
