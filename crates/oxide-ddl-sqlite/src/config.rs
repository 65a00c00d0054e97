//! Connection settings.

use std::env;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::{Error, Result};

/// Environment variable holding the database URL.
pub const DATABASE_URL: &str = "DATABASE_URL";

/// Environment variable holding the pool size.
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";

/// Where and how to connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite:db.sqlite3` or `sqlite::memory:`.
    pub url: String,
    /// Maximum pool size.
    ///
    /// Keep this at 1 for `sqlite::memory:`: every connection to an
    /// in-memory URL opens its own empty database.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
        }
    }
}

impl DatabaseConfig {
    /// Creates a config for `url` with a single connection.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the maximum pool size.
    #[must_use]
    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Reads `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`, falling back to
    /// the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `DATABASE_MAX_CONNECTIONS` is not a
    /// positive integer.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup(DATABASE_URL) {
            config.url = url;
        }
        if let Some(raw) = lookup(DATABASE_MAX_CONNECTIONS) {
            config.max_connections = match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(Error::Config {
                        key: DATABASE_MAX_CONNECTIONS,
                        message: String::from("must be at least 1"),
                    })
                }
                Err(e) => {
                    return Err(Error::Config {
                        key: DATABASE_MAX_CONNECTIONS,
                        message: e.to_string(),
                    })
                }
            };
        }
        Ok(config)
    }

    /// Opens a pool with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if the database cannot be opened.
    pub async fn connect(&self) -> Result<SqlitePool> {
        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.url)
            .await?;
        Ok(pool)
    }
}
