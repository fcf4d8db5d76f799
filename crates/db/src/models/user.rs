//! User entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use credstore_core::types::{UnixSeconds, UserId};

/// Full user row from the users table.
///
/// `passwd` is the caller-supplied credential hash, stored verbatim -- this
/// is an internal-facing type, never hand it to untrusted clients.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub passwd: Vec<u8>,
    pub created_at: UnixSeconds,
    pub last_edited_at: UnixSeconds,
    pub disabled: bool,
}

/// DTO for partially updating a user. Only non-`None` fields are applied;
/// `last_edited_at` is refreshed regardless.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub passwd: Option<Vec<u8>>,
}
