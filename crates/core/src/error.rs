//! The closed outcome type shared by every store operation.
//!
//! No operation in this workspace raises a raw database error or panics:
//! storage failures are logged at the call site and downgraded to
//! [`StoreError::Storage`], and every other failure mode is a distinct
//! variant so callers can match exhaustively.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The requested user or session does not exist.
    #[error("entity not found")]
    NotFound,

    /// A user with the requested username already exists.
    #[error("username already taken")]
    DuplicateUsername,

    /// Session issuance was refused. Deliberately covers unknown user,
    /// disabled user, and credential mismatch identically so the outcome
    /// does not leak which check failed.
    #[error("credentials refused")]
    Refused,

    /// Input failed a local validity check before reaching storage.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The storage layer failed. The original error is logged where it
    /// occurred; only its message is carried here.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Convenience alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;
