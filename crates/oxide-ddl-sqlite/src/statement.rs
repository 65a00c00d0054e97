//! Prepared statements bound to a pool.

use oxide_ddl_core::SqlValue;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool};
use tracing::debug;

use crate::error::Result;

/// SQL text and its bindings, ready to run on the pool it was prepared for.
#[derive(Debug, Clone)]
pub struct Statement {
    pool: SqlitePool,
    sql: String,
    bindings: Vec<SqlValue>,
}

impl Statement {
    pub(crate) fn new(pool: SqlitePool, sql: String, bindings: Vec<SqlValue>) -> Self {
        Self {
            pool,
            sql,
            bindings,
        }
    }

    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the bindings, in placeholder order.
    #[must_use]
    pub fn bindings(&self) -> &[SqlValue] {
        &self.bindings
    }

    /// Binds every value in order and executes the statement.
    ///
    /// Returns the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Database`](crate::Error::Database) with the engine's
    /// diagnostic if SQLite rejects the statement.
    pub async fn run(&self) -> Result<u64> {
        debug!(sql = %self.sql, bindings = self.bindings.len(), "Executing statement");
        let query = self
            .bindings
            .iter()
            .fold(sqlx::query(&self.sql), bind);
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

fn bind<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(None::<i64>),
        SqlValue::Bool(b) => query.bind(*b),
        SqlValue::Int(n) => query.bind(*n),
        SqlValue::Float(f) => query.bind(*f),
        SqlValue::Text(s) => query.bind(s.clone()),
        SqlValue::Blob(b) => query.bind(b.clone()),
    }
}
