//! Account store: user identity records and credential state.

use std::sync::Arc;

use credstore_core::error::{StoreError, StoreResult};
use credstore_core::types::{unix_now, UserId};
use uuid::Uuid;

use crate::models::user::{UpdateUser, User};
use crate::stores::{is_unique_violation, storage_err};
use crate::{DbPool, StoreConfig};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, passwd, created_at, last_edited_at, disabled";

/// Manages user records. The sole owner of credential-hash state; the
/// session store consults it (via the same relation) at issuance time.
#[derive(Debug, Clone)]
pub struct AccountStore {
    pool: DbPool,
    config: Arc<StoreConfig>,
}

impl AccountStore {
    pub(crate) fn new(pool: DbPool, config: Arc<StoreConfig>) -> Self {
        Self { pool, config }
    }

    /// Create a user with a caller-supplied credential hash.
    ///
    /// The hash is stored verbatim -- no hashing or salting happens here.
    /// Returns [`StoreError::DuplicateUsername`] if the username is taken,
    /// whether that is detected by the pre-insert check or by the unique
    /// constraint when a concurrent creation races past it.
    pub async fn create(&self, username: &str, credential_hash: &[u8]) -> StoreResult<()> {
        if username.is_empty() {
            return Err(StoreError::Validation("username must not be empty".into()));
        }

        let table = &self.config.users_table;

        let query = format!("SELECT id FROM {table} WHERE username = $1");
        let existing = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        if existing.is_some() {
            return Err(StoreError::DuplicateUsername);
        }

        let now = unix_now();
        let query = format!(
            "INSERT INTO {table} (id, username, passwd, created_at, last_edited_at, disabled)
             VALUES ($1, $2, $3, $4, $4, FALSE)"
        );
        sqlx::query(&query)
            .bind(Uuid::new_v4())
            .bind(username)
            .bind(credential_hash)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateUsername
                } else {
                    storage_err(e)
                }
            })?;

        Ok(())
    }

    /// Partially update a user. Only non-`None` fields in `input` are
    /// applied; `last_edited_at` is always refreshed. An empty username is
    /// rejected, same as at creation.
    pub async fn update(&self, id: UserId, input: &UpdateUser) -> StoreResult<()> {
        if input.username.as_deref() == Some("") {
            return Err(StoreError::Validation("username must not be empty".into()));
        }

        let table = &self.config.users_table;
        let query = format!(
            "UPDATE {table} SET
                username = COALESCE($2, username),
                passwd = COALESCE($3, passwd),
                last_edited_at = $4
             WHERE id = $1"
        );
        let result = sqlx::query(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.passwd)
            .bind(unix_now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    StoreError::DuplicateUsername
                } else {
                    storage_err(e)
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Fetch a user by internal ID, including the raw credential hash.
    pub async fn find_by_id(&self, id: UserId) -> StoreResult<User> {
        let table = &self.config.users_table;
        let query = format!("SELECT {COLUMNS} FROM {table} WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?
            .ok_or(StoreError::NotFound)
    }

    /// Resolve a username (case-sensitive) to its user ID.
    pub async fn resolve_id(&self, username: &str) -> StoreResult<UserId> {
        let table = &self.config.users_table;
        let query = format!("SELECT id FROM {table} WHERE username = $1");
        let row: Option<(UserId,)> = sqlx::query_as(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        row.map(|(id,)| id).ok_or(StoreError::NotFound)
    }

    /// Hard-delete a user. Does not cascade to sessions: any live sessions
    /// become orphans and are removed only by expiry or termination.
    pub async fn delete(&self, id: UserId) -> StoreResult<()> {
        let table = &self.config.users_table;
        let query = format!("DELETE FROM {table} WHERE id = $1");
        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Mark a user disabled. Disabled users are refused session issuance.
    pub async fn disable(&self, id: UserId) -> StoreResult<()> {
        self.set_disabled(id, true).await
    }

    /// Clear the disabled flag.
    pub async fn enable(&self, id: UserId) -> StoreResult<()> {
        self.set_disabled(id, false).await
    }

    async fn set_disabled(&self, id: UserId, disabled: bool) -> StoreResult<()> {
        let table = &self.config.users_table;
        let query = format!("UPDATE {table} SET disabled = $2, last_edited_at = $3 WHERE id = $1");
        let result = sqlx::query(&query)
            .bind(id)
            .bind(disabled)
            .bind(unix_now())
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
