//! Shared primitives for all Rust crates in Switchyard.

#![forbid(unsafe_code)]

/// Authenticated caller primitives shared across services.
pub mod auth;
/// Cursor pagination and list envelopes.
pub mod pagination;
/// Timestamp formats used on the wire.
pub mod timestamp;

use thiserror::Error;

pub use auth::CallerIdentity;
pub use pagination::{DEFAULT_PAGE_SIZE, ListEnvelope, MAX_PAGE_SIZE, PageRequest, Timestamped};

/// Result type used across Switchyard crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Caller is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Caller is authenticated but not allowed to perform the operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns a short, stable label for the error category.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn error_kind_is_stable() {
        assert_eq!(AppError::NotFound("call".to_owned()).kind(), "not_found");
        assert_eq!(AppError::Internal("boom".to_owned()).kind(), "internal");
    }

    #[test]
    fn error_display_includes_category() {
        let error = AppError::Validation("page token".to_owned());
        assert_eq!(error.to_string(), "validation error: page token");
    }
}
