//! Foreign key targets and referential actions.

use crate::builder::Expression;

use super::table::Table;

/// Referential action for `ON UPDATE` / `ON DELETE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependency {
    /// No action.
    NoAction,
    /// Restrict deletion/update.
    Restrict,
    /// Set to NULL.
    SetNull,
    /// Set to default value.
    SetDefault,
    /// Cascade the operation.
    Cascade,
}

impl Dependency {
    /// Returns the SQL keyword of the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
            Self::Cascade => "CASCADE",
        }
    }
}

/// The target and actions of a table-level `FOREIGN KEY` constraint.
///
/// `T` is the host type of the referencing column; the target must have the
/// same type.
#[derive(Debug, Clone)]
pub struct ForeignKey<T> {
    pub(crate) target: Expression<T>,
    pub(crate) on_update: Option<Dependency>,
    pub(crate) on_delete: Option<Dependency>,
}

impl<T> ForeignKey<T> {
    /// References a column, usually qualified as `table.column`.
    #[must_use]
    pub fn references(target: &Expression<T>) -> Self {
        Self {
            target: target.clone(),
            on_update: None,
            on_delete: None,
        }
    }

    /// References a table by name.
    #[must_use]
    pub fn references_table<C: ?Sized>(table: &Table<'_, C>) -> Self {
        Self {
            target: table.expression(),
            on_update: None,
            on_delete: None,
        }
    }

    /// Adds `ON UPDATE <action>`.
    #[must_use]
    pub fn on_update(mut self, action: Dependency) -> Self {
        self.on_update = Some(action);
        self
    }

    /// Adds `ON DELETE <action>`.
    #[must_use]
    pub fn on_delete(mut self, action: Dependency) -> Self {
        self.on_delete = Some(action);
        self
    }
}
