//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The vendor model itself is tolerant: association operations are idempotent
/// no-ops and plain setters always succeed. Errors only arise at parse and
/// rehydration boundaries, so the variants stay few.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a persisted record that breaks an
    /// invariant on load).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A locale code was malformed.
    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_locale(msg: impl Into<String>) -> Self {
        Self::InvalidLocale(msg.into())
    }
}
