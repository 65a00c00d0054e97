//! Table identifiers bound to their owning connection.

use crate::builder::Expression;
use crate::connection::Connection;

use super::builder::SchemaBuilder;

/// A table name together with the connection that owns the table.
#[derive(Debug)]
pub struct Table<'c, C: ?Sized> {
    name: String,
    connection: &'c C,
}

impl<C: ?Sized> Clone for Table<'_, C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            connection: self.connection,
        }
    }
}

impl<'c, C: ?Sized> Table<'c, C> {
    /// Creates a table reference.
    ///
    /// The name is emitted verbatim, so it may be schema-qualified.
    #[must_use]
    pub fn new(name: impl Into<String>, connection: &'c C) -> Self {
        Self {
            name: name.into(),
            connection,
        }
    }

    /// Returns the fully-qualified table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning connection.
    #[must_use]
    pub const fn connection(&self) -> &'c C {
        self.connection
    }

    /// Returns a column qualified by this table, e.g. `users.id`.
    #[must_use]
    pub fn column<T>(&self, name: &str) -> Expression<T> {
        Expression::new(format!("{}.{name}", self.name))
    }

    /// Returns the table name as a reference expression.
    #[must_use]
    pub fn expression<T>(&self) -> Expression<T> {
        Expression::new(self.name.as_str())
    }
}

impl<C: Connection + ?Sized> Table<'_, C> {
    /// Declares the table with `block` and prepares the `CREATE TABLE`
    /// statement on the owning connection.
    ///
    /// # Errors
    ///
    /// Returns the connection's error unchanged.
    pub fn create<F>(&self, block: F) -> Result<C::Statement, C::Error>
    where
        F: FnOnce(&mut SchemaBuilder<'_, C>),
    {
        let mut builder = SchemaBuilder::new(self);
        block(&mut builder);
        builder.statement()
    }

    /// Prepares `DROP TABLE <name>` on the owning connection.
    ///
    /// # Errors
    ///
    /// Returns the connection's error unchanged.
    pub fn drop_table(&self) -> Result<C::Statement, C::Error> {
        self.connection.run(&format!("DROP TABLE {}", self.name))
    }
}
