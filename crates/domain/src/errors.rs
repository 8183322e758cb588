//! Error types for the sales domain.

/// Errors raised while resolving a named view
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The requested name is not on the view allow-list
    #[error("Invalid or nonexistent view: {0}")]
    Unknown(String),
}

impl ViewError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "INVALID_VIEW",
        }
    }
}

/// Result alias for view resolution
pub type ViewResult<T> = Result<T, ViewError>;
