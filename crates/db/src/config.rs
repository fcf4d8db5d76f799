//! Store configuration.
//!
//! Table names are configurable because the embedding application may host
//! several stores in one database. They are interpolated into query text,
//! so they are validated as plain SQL identifiers up front.

use credstore_core::error::{StoreError, StoreResult};

/// Default name of the users relation.
pub const DEFAULT_USERS_TABLE: &str = "users";

/// Default name of the sessions relation.
pub const DEFAULT_SESSIONS_TABLE: &str = "sessions";

/// Default session lifetime in seconds (one hour).
pub const DEFAULT_SESSION_LIFETIME_SECS: i64 = 3600;

/// Configuration accepted at store construction.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Name of the users relation (default: `users`).
    pub users_table: String,
    /// Name of the sessions relation (default: `sessions`).
    pub sessions_table: String,
    /// Lifetime applied to newly issued and renewed sessions, in seconds
    /// (default: `3600`).
    pub session_lifetime_secs: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            users_table: DEFAULT_USERS_TABLE.to_string(),
            sessions_table: DEFAULT_SESSIONS_TABLE.to_string(),
            session_lifetime_secs: DEFAULT_SESSION_LIFETIME_SECS,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                           | Default    |
    /// |-----------------------------------|------------|
    /// | `CREDSTORE_USERS_TABLE`           | `users`    |
    /// | `CREDSTORE_SESSIONS_TABLE`        | `sessions` |
    /// | `CREDSTORE_SESSION_LIFETIME_SECS` | `3600`     |
    pub fn from_env() -> Self {
        let users_table = std::env::var("CREDSTORE_USERS_TABLE")
            .unwrap_or_else(|_| DEFAULT_USERS_TABLE.into());

        let sessions_table = std::env::var("CREDSTORE_SESSIONS_TABLE")
            .unwrap_or_else(|_| DEFAULT_SESSIONS_TABLE.into());

        let session_lifetime_secs: i64 = std::env::var("CREDSTORE_SESSION_LIFETIME_SECS")
            .unwrap_or_else(|_| DEFAULT_SESSION_LIFETIME_SECS.to_string())
            .parse()
            .expect("CREDSTORE_SESSION_LIFETIME_SECS must be a valid i64");

        Self {
            users_table,
            sessions_table,
            session_lifetime_secs,
        }
    }

    /// Reject table names that are not plain identifiers and non-positive
    /// lifetimes.
    pub fn validate(&self) -> StoreResult<()> {
        for name in [&self.users_table, &self.sessions_table] {
            if !is_sql_identifier(name) {
                return Err(StoreError::Validation(format!(
                    "table name {name:?} is not a plain SQL identifier"
                )));
            }
        }
        if self.session_lifetime_secs <= 0 {
            return Err(StoreError::Validation(
                "session lifetime must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// A plain identifier: ASCII letters, digits, underscores; must not start
/// with a digit.
fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
