//! Shared helpers for store integration tests.
//!
//! Every test gets a fresh database from `#[sqlx::test]`; these helpers
//! bootstrap the schema the same way production callers do.

#![allow(dead_code)] // not every test file uses every helper

use sqlx::PgPool;

use credstore_core::types::{UnixSeconds, UserId};
use credstore_db::{CredStore, StoreConfig};

/// A 32-byte credential hash, as an upstream password hasher would supply.
pub const HASH_ALICE: &[u8] = &[0x01; 32];

/// A different 32-byte hash, guaranteed not to match [`HASH_ALICE`].
pub const HASH_BOB: &[u8] = &[0x02; 32];

/// Initialize a store with default configuration over the given pool.
pub async fn init_store(pool: &PgPool) -> CredStore {
    CredStore::init(pool.clone(), StoreConfig::default())
        .await
        .expect("store init should succeed")
}

/// Create a user and resolve the generated ID.
pub async fn create_user(store: &CredStore, username: &str, hash: &[u8]) -> UserId {
    store
        .accounts
        .create(username, hash)
        .await
        .expect("user creation should succeed");
    store
        .accounts
        .resolve_id(username)
        .await
        .expect("freshly created user should resolve")
}

/// Overwrite a session's expiry directly, bypassing the store, so tests can
/// move a session into the past without sleeping.
pub async fn force_expiry(pool: &PgPool, token: &[u8], expires_at: UnixSeconds) {
    let updated = sqlx::query("UPDATE sessions SET expires_at = $2 WHERE token = $1")
        .bind(token)
        .bind(expires_at)
        .execute(pool)
        .await
        .expect("expiry override should succeed")
        .rows_affected();
    assert_eq!(updated, 1, "expected exactly one session row for the token");
}

/// Fetch a session's stored expiry directly.
pub async fn stored_expiry(pool: &PgPool, token: &[u8]) -> UnixSeconds {
    let (expires_at,): (i64,) =
        sqlx::query_as("SELECT expires_at FROM sessions WHERE token = $1")
            .bind(token)
            .fetch_one(pool)
            .await
            .expect("session row should exist");
    expires_at
}
