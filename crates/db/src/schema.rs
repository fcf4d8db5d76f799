//! Schema bootstrap for the two relations.
//!
//! Table names come from [`StoreConfig`], so the DDL is rendered at runtime
//! instead of living in static migration files. All statements are
//! `IF NOT EXISTS` and safe to re-run.

use credstore_core::error::StoreResult;

use crate::stores::storage_err;
use crate::{DbPool, StoreConfig};

/// Create or verify both relations and their indexes.
pub async fn init(pool: &DbPool, config: &StoreConfig) -> StoreResult<()> {
    let users = &config.users_table;
    let sessions = &config.sessions_table;

    let statements = [
        format!(
            "CREATE TABLE IF NOT EXISTS {users} (
                id UUID PRIMARY KEY,
                username TEXT NOT NULL UNIQUE,
                passwd BYTEA NOT NULL,
                created_at BIGINT NOT NULL,
                last_edited_at BIGINT NOT NULL,
                disabled BOOLEAN NOT NULL DEFAULT FALSE
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {sessions} (
                id UUID PRIMARY KEY,
                user_id UUID NOT NULL,
                token BYTEA NOT NULL,
                expires_at BIGINT NOT NULL
            )"
        ),
        // Token uniqueness rests on 256 bits of randomness; the index is for
        // lookup, not enforcement.
        format!("CREATE INDEX IF NOT EXISTS idx_{sessions}_token ON {sessions} (token)"),
        format!("CREATE INDEX IF NOT EXISTS idx_{sessions}_user_id ON {sessions} (user_id)"),
        format!("CREATE INDEX IF NOT EXISTS idx_{sessions}_expires_at ON {sessions} (expires_at)"),
    ];

    for statement in &statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(storage_err)?;
    }

    tracing::debug!(users, sessions, "Schema initialized");
    Ok(())
}
