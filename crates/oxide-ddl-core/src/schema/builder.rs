//! The `CREATE TABLE` accumulator.

use crate::builder::{join, namespace, Expressible, Expression, SqlValue, Value};
use crate::connection::Connection;

use super::column::{ColumnModifier, ColumnOptions};
use super::constraint::ForeignKey;
use super::table::Table;

/// Collects column declarations and table constraints for one table.
///
/// Clauses are kept in call order. The builder is consumed by
/// [`SchemaBuilder::statement`], so each one produces a single statement.
#[derive(Debug)]
pub struct SchemaBuilder<'a, C: ?Sized> {
    table: &'a Table<'a, C>,
    clauses: Vec<Expression<()>>,
}

impl<'a, C: ?Sized> SchemaBuilder<'a, C> {
    /// Creates an empty builder for `table`.
    #[must_use]
    pub const fn new(table: &'a Table<'a, C>) -> Self {
        Self {
            table,
            clauses: Vec::new(),
        }
    }

    /// Returns the clauses collected so far.
    #[must_use]
    pub fn clauses(&self) -> &[Expression<()>] {
        &self.clauses
    }

    /// Declares a column.
    ///
    /// Emits `<name> <TYPE>` followed, in this order, by `PRIMARY KEY`,
    /// `NOT NULL`, `UNIQUE`, `CHECK (...)`, `DEFAULT ?` and the trailing
    /// `COLLATE` or `REFERENCES` clause, each only when requested.
    pub fn column<T: Value>(&mut self, name: &Expression<T>, options: ColumnOptions<T>) {
        let mut parts = vec![name.to_expression(), Expression::new(T::DATATYPE)];
        if options.primary_key {
            parts.push(Expression::new("PRIMARY KEY"));
        }
        if !options.null {
            parts.push(Expression::new("NOT NULL"));
        }
        if options.unique {
            parts.push(Expression::new("UNIQUE"));
        }
        if let Some(check) = options.check {
            let (sql, bindings) = check.build();
            parts.push(Expression::with_bindings(format!("CHECK ({sql})"), bindings));
        }
        if let Some(value) = options.default {
            parts.push(Expression::with_bindings(
                "DEFAULT ?",
                vec![value.to_sql_value()],
            ));
        }
        match options.modifier {
            Some(ColumnModifier::Collate(collation)) => {
                parts.push(Expression::new(format!("COLLATE {}", collation.as_sql())));
            }
            Some(ColumnModifier::References(target)) => {
                parts.push(Expression::new("REFERENCES"));
                parts.push(namespace(&target));
            }
            None => {}
        }
        self.clauses.push(join(" ", &parts));
    }

    /// Adds a table-level `PRIMARY KEY(<columns>)` constraint.
    pub fn primary_key(&mut self, columns: &[&dyn Expressible]) {
        let (sql, bindings) = join(", ", columns).build();
        self.clauses
            .push(Expression::with_bindings(format!("PRIMARY KEY({sql})"), bindings));
    }

    /// Adds a table-level `UNIQUE(<columns>)` constraint.
    pub fn unique(&mut self, columns: &[&dyn Expressible]) {
        let (sql, bindings) = join(", ", columns).build();
        self.clauses
            .push(Expression::with_bindings(format!("UNIQUE({sql})"), bindings));
    }

    /// Adds a table-level `CHECK <condition>` constraint.
    ///
    /// The condition's own text is emitted as is; combinators from
    /// [`Expression`] already parenthesize themselves.
    pub fn check(&mut self, condition: &Expression<bool>) {
        self.clauses.push(Expression::with_bindings(
            format!("CHECK {}", condition.sql()),
            condition.bindings().to_vec(),
        ));
    }

    /// Adds a table-level `FOREIGN KEY(<column>) REFERENCES ...` constraint.
    pub fn foreign_key<T>(&mut self, column: &Expression<T>, key: ForeignKey<T>) {
        let mut parts = vec![
            Expression::<()>::with_bindings(
                format!("FOREIGN KEY({}) REFERENCES", column.sql()),
                column.bindings().to_vec(),
            ),
            namespace(&key.target).to_expression(),
        ];
        if let Some(action) = key.on_update {
            parts.push(Expression::new(format!("ON UPDATE {}", action.as_sql())));
        }
        if let Some(action) = key.on_delete {
            parts.push(Expression::new(format!("ON DELETE {}", action.as_sql())));
        }
        self.clauses.push(join(" ", &parts));
    }

    /// Compiles the collected clauses into `CREATE TABLE <name> (...)`.
    #[must_use]
    pub fn build(&self) -> (String, Vec<SqlValue>) {
        let (body, bindings) = join(", ", &self.clauses).build();
        (
            format!("CREATE TABLE {} ({body})", self.table.name()),
            bindings,
        )
    }
}

impl<C: Connection + ?Sized> SchemaBuilder<'_, C> {
    /// Compiles the statement and prepares it on the table's connection.
    ///
    /// # Errors
    ///
    /// Returns the connection's error unchanged.
    pub fn statement(self) -> Result<C::Statement, C::Error> {
        let (sql, bindings) = self.build();
        self.table.connection().prepare(&sql, bindings)
    }
}
