//! Options for a single column declaration.

use crate::builder::{Expressible, Expression};

use super::table::Table;

/// Built-in SQLite collating sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collation {
    /// Byte-wise comparison.
    Binary,
    /// Case-insensitive for ASCII.
    NoCase,
    /// Ignores trailing spaces.
    RTrim,
}

impl Collation {
    /// Returns the collation name.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::NoCase => "NOCASE",
            Self::RTrim => "RTRIM",
        }
    }
}

/// The clause that ends a column declaration.
///
/// A declaration carries at most one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnModifier {
    /// `COLLATE <name>`.
    Collate(Collation),
    /// `REFERENCES <table>(<column>)`. Holds the reference before
    /// namespacing.
    References(Expression<()>),
}

/// Constraints for one column of type `T`.
///
/// Defaults to a nullable column with no constraints.
#[derive(Debug, Clone)]
pub struct ColumnOptions<T> {
    pub(crate) primary_key: bool,
    pub(crate) null: bool,
    pub(crate) unique: bool,
    pub(crate) check: Option<Expression<bool>>,
    pub(crate) default: Option<T>,
    pub(crate) modifier: Option<ColumnModifier>,
}

impl<T> Default for ColumnOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ColumnOptions<T> {
    /// Creates options for a plain nullable column.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primary_key: false,
            null: true,
            unique: false,
            check: None,
            default: None,
            modifier: None,
        }
    }

    /// Adds `PRIMARY KEY`.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Adds `NOT NULL`.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.null = false;
        self
    }

    /// Adds `UNIQUE`.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Adds `CHECK (<condition>)`.
    #[must_use]
    pub fn check(mut self, condition: Expression<bool>) -> Self {
        self.check = Some(condition);
        self
    }

    /// Adds `DEFAULT ?`, bound to `value`.
    #[must_use]
    pub fn default_value(mut self, value: T) -> Self {
        self.default = Some(value);
        self
    }

    /// Ends the declaration with `REFERENCES` to a column of the same type.
    ///
    /// Replaces a collation set earlier.
    #[must_use]
    pub fn references(mut self, target: &Expression<T>) -> Self {
        self.modifier = Some(ColumnModifier::References(target.to_expression()));
        self
    }

    /// Ends the declaration with `REFERENCES <table>`, leaving the
    /// referenced column to the engine.
    ///
    /// Replaces a collation set earlier.
    #[must_use]
    pub fn references_table<C: ?Sized>(mut self, table: &Table<'_, C>) -> Self {
        self.modifier = Some(ColumnModifier::References(table.expression()));
        self
    }
}

impl ColumnOptions<String> {
    /// Ends the declaration with `COLLATE <collation>`.
    ///
    /// Replaces a reference set earlier.
    #[must_use]
    pub fn collate(mut self, collation: Collation) -> Self {
        self.modifier = Some(ColumnModifier::Collate(collation));
        self
    }
}
