//! Session store: credential-gated token issuance, validation, and reaping.

use std::sync::Arc;

use credstore_core::error::{StoreError, StoreResult};
use credstore_core::token::SessionToken;
use credstore_core::types::{unix_now, UserId};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::session::Session;
use crate::stores::storage_err;
use crate::{DbPool, StoreConfig};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, token, expires_at";

/// What issuance needs to know about a user.
#[derive(FromRow)]
struct CredentialRow {
    passwd: Vec<u8>,
    disabled: bool,
}

/// Issues, validates, renews, and reaps bearer-token sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    pool: DbPool,
    config: Arc<StoreConfig>,
}

impl SessionStore {
    pub(crate) fn new(pool: DbPool, config: Arc<StoreConfig>) -> Self {
        Self { pool, config }
    }

    /// Issue a session for `user_id` if `credential_hash` is byte-for-byte
    /// equal to the stored hash.
    ///
    /// Refusal is deliberately uniform: unknown user, disabled user, and
    /// credential mismatch all return [`StoreError::Refused`] so the caller
    /// cannot tell which check failed. On success the session expires at
    /// now + the configured lifetime.
    pub async fn create(
        &self,
        user_id: UserId,
        credential_hash: &[u8],
    ) -> StoreResult<SessionToken> {
        let users = &self.config.users_table;
        let query = format!("SELECT passwd, disabled FROM {users} WHERE id = $1");
        let user = sqlx::query_as::<_, CredentialRow>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;

        let Some(user) = user else {
            return Err(StoreError::Refused);
        };
        if user.disabled || user.passwd.as_slice() != credential_hash {
            return Err(StoreError::Refused);
        }

        let token = SessionToken::generate();
        let expires_at = unix_now() + self.config.session_lifetime_secs;

        let sessions = &self.config.sessions_table;
        let query = format!(
            "INSERT INTO {sessions} (id, user_id, token, expires_at) VALUES ($1, $2, $3, $4)"
        );
        sqlx::query(&query)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(token.as_bytes())
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        Ok(token)
    }

    /// All sessions belonging to a user, stale ones included. Callers that
    /// want only live sessions filter on `expires_at` themselves.
    pub async fn list_for_user(&self, user_id: UserId) -> StoreResult<Vec<Session>> {
        let table = &self.config.sessions_table;
        let query = format!("SELECT {COLUMNS} FROM {table} WHERE user_id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)
    }

    /// Reset a session's expiry to now + `extend_secs` (when `Some` and
    /// non-zero) or now + the configured default lifetime.
    ///
    /// This is an absolute reset, not an additive extension, and the current
    /// expiry is not consulted first: a session whose expiry has passed but
    /// whose row has not been reaped yet is revived by renewal. A negative
    /// extension is applied as-is, backdating the expiry so the next check
    /// or sweep removes the session.
    pub async fn renew(&self, token: &[u8], extend_secs: Option<i64>) -> StoreResult<()> {
        let lifetime = extend_secs
            .filter(|secs| *secs != 0)
            .unwrap_or(self.config.session_lifetime_secs);
        let expires_at = unix_now() + lifetime;

        let table = &self.config.sessions_table;
        let query = format!("UPDATE {table} SET expires_at = $2 WHERE token = $1");
        let result = sqlx::query(&query)
            .bind(token)
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Delete every session whose expiry has passed, returning the count.
    ///
    /// The store exposes only this sweep primitive; scheduling belongs to
    /// the caller.
    pub async fn cleanup_expired(&self) -> StoreResult<u64> {
        let table = &self.config.sessions_table;
        let query = format!("DELETE FROM {table} WHERE expires_at < $1");
        let result = sqlx::query(&query)
            .bind(unix_now())
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        let deleted = result.rows_affected();
        if deleted > 0 {
            tracing::info!(deleted, "Session sweep: purged expired rows");
        }
        Ok(deleted)
    }

    /// Raw lookup by token. No expiry check, no reaping.
    pub async fn find_by_token(&self, token: &[u8]) -> StoreResult<Session> {
        let table = &self.config.sessions_table;
        let query = format!("SELECT {COLUMNS} FROM {table} WHERE token = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?
            .ok_or(StoreError::NotFound)
    }

    /// Validity check with lazy reaping.
    ///
    /// Unknown token reports `false` (not an error). A known token whose
    /// expiry has passed is deleted on the spot and reports `false`.
    pub async fn check(&self, token: &[u8]) -> StoreResult<bool> {
        let table = &self.config.sessions_table;
        let query = format!("SELECT {COLUMNS} FROM {table} WHERE token = $1");
        let session = sqlx::query_as::<_, Session>(&query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;

        let Some(session) = session else {
            return Ok(false);
        };

        if session.expires_at < unix_now() {
            let query = format!("DELETE FROM {table} WHERE id = $1");
            sqlx::query(&query)
                .bind(session.id)
                .execute(&self.pool)
                .await
                .map_err(storage_err)?;
            tracing::debug!(session_id = %session.id, "Lazily reaped expired session");
            return Ok(false);
        }

        Ok(true)
    }

    /// Explicitly delete a session by token, regardless of expiry state.
    pub async fn terminate(&self, token: &[u8]) -> StoreResult<()> {
        let table = &self.config.sessions_table;
        let query = format!("DELETE FROM {table} WHERE token = $1");
        let result = sqlx::query(&query)
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
