//! The seam between statement assembly and a database engine.

use crate::builder::SqlValue;

/// A database connection that can prepare statements.
///
/// Builders in this crate only ever hand finished SQL and its bindings to
/// this trait. Whatever the engine reports comes back to the caller as is.
pub trait Connection {
    /// The prepared-statement handle.
    type Statement;

    /// The error reported by the engine.
    type Error;

    /// Prepares `sql` with `bindings` attached to its placeholders, in order.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the statement cannot be prepared.
    fn prepare(&self, sql: &str, bindings: Vec<SqlValue>)
        -> Result<Self::Statement, Self::Error>;

    /// Prepares a statement that has no placeholders.
    ///
    /// # Errors
    ///
    /// Returns the engine's error if the statement cannot be prepared.
    fn run(&self, sql: &str) -> Result<Self::Statement, Self::Error> {
        self.prepare(sql, Vec::new())
    }
}
