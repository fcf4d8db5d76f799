//! Session model.

use sqlx::FromRow;
use credstore_core::types::{UnixSeconds, UserId};

/// A session row from the sessions table.
///
/// `id` is the storage identity; `token` is the bearer secret and the
/// de facto lookup key. A row whose `expires_at` has passed may still exist
/// until a check, a termination, or a sweep removes it.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: uuid::Uuid,
    pub user_id: UserId,
    pub token: Vec<u8>,
    pub expires_at: UnixSeconds,
}
