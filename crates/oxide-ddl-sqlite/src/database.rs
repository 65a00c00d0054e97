//! The SQLite [`Connection`].

use oxide_ddl_core::schema::{SchemaBuilder, Table};
use oxide_ddl_core::{Connection, SqlValue};
use sqlx::sqlite::SqlitePool;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use crate::statement::Statement;

/// A SQLite database reached through a `sqlx` pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens a pool described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if the database cannot be opened.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!(url = %config.url, max_connections = config.max_connections, "Connecting");
        let pool = config.connect().await?;
        Ok(Self::from_pool(pool))
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns a reference to the table `name` on this database.
    #[must_use]
    pub fn table(&self, name: impl Into<String>) -> Table<'_, Self> {
        Table::new(name, self)
    }

    /// Declares the table `name` with `block`, then creates it.
    ///
    /// Returns the statement that was run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] with the engine's diagnostic if SQLite
    /// rejects the statement.
    pub async fn create_table<F>(&self, name: &str, block: F) -> Result<Statement>
    where
        F: FnOnce(&mut SchemaBuilder<'_, Self>),
    {
        let statement = self.table(name).create(block)?;
        statement.run().await?;
        info!(table = name, "Created table");
        Ok(statement)
    }

    /// Drops the table `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`] if the table does not exist or cannot be
    /// dropped.
    pub async fn drop_table(&self, name: &str) -> Result<Statement> {
        let statement = self.table(name).drop_table()?;
        statement.run().await?;
        info!(table = name, "Dropped table");
        Ok(statement)
    }
}

impl Connection for Database {
    type Statement = Statement;
    type Error = Error;

    fn prepare(&self, sql: &str, bindings: Vec<SqlValue>) -> Result<Statement> {
        debug!(sql = %sql, bindings = bindings.len(), "Preparing statement");
        Ok(Statement::new(self.pool.clone(), sql.to_string(), bindings))
    }
}
