//! Error types for pass and schedule operations.

/// Result type for hall pass operations
pub type HallPassResult<T> = Result<T, HallPassError>;

/// Error type for hall pass operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HallPassError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl HallPassError {
    /// Returns `true` for input rejections that leave state unchanged.
    pub fn is_validation(&self) -> bool {
        matches!(self, HallPassError::ValidationError(_))
    }
}
