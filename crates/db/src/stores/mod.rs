//! Store layer.
//!
//! Each store is constructed once with its pool and configuration and
//! provides async operations returning [`StoreResult`]. Raw sqlx errors
//! never cross this boundary.

use credstore_core::error::StoreError;

pub mod account;
pub mod session;

pub use account::AccountStore;
pub use session::SessionStore;

/// Log a storage failure and downgrade it to the closed error type.
pub(crate) fn storage_err(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Storage failure");
    StoreError::Storage(err.to_string())
}

/// PostgreSQL unique constraint violation (SQLSTATE 23505).
///
/// The username existence check and the insert are not transactional, so a
/// concurrent creation can slip past the check; the constraint catches it
/// and both paths report the same duplicate outcome.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}
