//! PostgreSQL-backed identity and session storage.
//!
//! The public surface is [`CredStore`]: construct it with a connection pool
//! and a [`config::StoreConfig`], and it bootstraps both relations and hands
//! back the two stores. Each store holds its collaborators (pool + config)
//! as instance state; there are no globals.
//!
//! Schema initialization failure is returned as an error rather than
//! swallowed; hosting processes should treat it as fatal.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use credstore_core::error::StoreResult;

pub mod config;
pub mod models;
pub mod schema;
pub mod stores;

pub use config::StoreConfig;
pub use stores::{AccountStore, SessionStore};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Handle bundling the two stores over one pool and one configuration.
#[derive(Debug, Clone)]
pub struct CredStore {
    pub accounts: AccountStore,
    pub sessions: SessionStore,
}

impl CredStore {
    /// Validate the configuration, create or verify both relations, and
    /// construct the stores.
    ///
    /// Idempotent: safe to call against a database that already carries the
    /// schema. Any failure here means the store is unusable.
    pub async fn init(pool: DbPool, config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;
        schema::init(&pool, &config).await?;

        let config = Arc::new(config);
        Ok(Self {
            accounts: AccountStore::new(pool.clone(), Arc::clone(&config)),
            sessions: SessionStore::new(pool, config),
        })
    }
}
