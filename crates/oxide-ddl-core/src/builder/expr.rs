//! Typed expressions and the join combinator.
//!
//! An [`Expression`] is SQL text plus the values bound to its `?`
//! placeholders, in order. Every composite in this crate is produced by
//! [`join`], which concatenates text and bindings in the same order so the
//! two can never drift apart.

use std::fmt;
use std::marker::PhantomData;

use super::value::{SqlValue, Value};

/// Anything that projects to SQL text and its ordered bindings.
pub trait Expressible {
    /// Returns the SQL text.
    fn sql(&self) -> &str;

    /// Returns the values bound to the placeholders in [`Expressible::sql`].
    fn bindings(&self) -> &[SqlValue];

    /// Copies the text and bindings into an untyped expression.
    fn to_expression(&self) -> Expression<()> {
        Expression::with_bindings(self.sql(), self.bindings().to_vec())
    }
}

impl<E: Expressible + ?Sized> Expressible for &E {
    fn sql(&self) -> &str {
        (**self).sql()
    }

    fn bindings(&self) -> &[SqlValue] {
        (**self).bindings()
    }
}

/// An SQL fragment evaluating to the host type `T`.
///
/// `T` only tags the expression: a column of type `Expression<i64>` can be
/// declared as `INTEGER`, compared against `i64` values and referenced by
/// other `i64` columns. Keywords and composites use `Expression<()>`.
pub struct Expression<T> {
    sql: String,
    bindings: Vec<SqlValue>,
    _type: PhantomData<fn() -> T>,
}

/// Creates a column reference.
#[must_use]
pub fn col<T>(name: &str) -> Expression<T> {
    Expression::new(name)
}

impl<T> Expression<T> {
    /// Creates an expression with no bindings.
    ///
    /// **Warning**: the text is emitted verbatim. Never pass user input here.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self::with_bindings(sql, Vec::new())
    }

    /// Creates an expression from text and the values bound to its
    /// placeholders.
    #[must_use]
    pub fn with_bindings(sql: impl Into<String>, bindings: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            bindings,
            _type: PhantomData,
        }
    }

    /// Consumes the expression and returns the SQL and bindings.
    #[must_use]
    pub fn build(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.bindings)
    }

    fn infix<U>(self, op: &str, rhs: Expression<U>) -> Expression<bool> {
        let mut bindings = self.bindings;
        bindings.extend(rhs.bindings);
        Expression::with_bindings(format!("({} {op} {})", self.sql, rhs.sql), bindings)
    }

    fn postfix(self, op: &str) -> Expression<bool> {
        Expression::with_bindings(format!("({} {op})", self.sql), self.bindings)
    }

    /// `(self = rhs)`.
    ///
    /// This shadows [`PartialEq::eq`] for method calls. To compare two
    /// expressions structurally, call the trait method or use `==`:
    ///
    /// ```rust
    /// use oxide_ddl_core::builder::{col, Expressible};
    ///
    /// let a = col::<i64>("id");
    /// let b = col::<i64>("id");
    /// assert!(PartialEq::eq(&a, &b));
    /// assert!(a == b);
    /// assert_eq!(a.eq(b).sql(), "(id = id)");
    /// ```
    #[must_use]
    pub fn eq(self, rhs: impl Into<Self>) -> Expression<bool> {
        self.infix("=", rhs.into())
    }

    /// `(self != rhs)`.
    #[must_use]
    pub fn not_eq(self, rhs: impl Into<Self>) -> Expression<bool> {
        self.infix("!=", rhs.into())
    }

    /// `(self < rhs)`.
    #[must_use]
    pub fn lt(self, rhs: impl Into<Self>) -> Expression<bool> {
        self.infix("<", rhs.into())
    }

    /// `(self <= rhs)`.
    #[must_use]
    pub fn lt_eq(self, rhs: impl Into<Self>) -> Expression<bool> {
        self.infix("<=", rhs.into())
    }

    /// `(self > rhs)`.
    #[must_use]
    pub fn gt(self, rhs: impl Into<Self>) -> Expression<bool> {
        self.infix(">", rhs.into())
    }

    /// `(self >= rhs)`.
    #[must_use]
    pub fn gt_eq(self, rhs: impl Into<Self>) -> Expression<bool> {
        self.infix(">=", rhs.into())
    }

    /// `(self IS NULL)`.
    #[must_use]
    pub fn is_null(self) -> Expression<bool> {
        self.postfix("IS NULL")
    }

    /// `(self IS NOT NULL)`.
    #[must_use]
    pub fn is_not_null(self) -> Expression<bool> {
        self.postfix("IS NOT NULL")
    }
}

impl<T: Value> Expression<T> {
    /// Creates a single `?` placeholder bound to `value`.
    #[must_use]
    pub fn value(value: T) -> Self {
        Self::with_bindings("?", vec![value.to_sql_value()])
    }
}

impl Expression<String> {
    /// `(self LIKE pattern)`.
    #[must_use]
    pub fn like(self, pattern: impl Into<Self>) -> Expression<bool> {
        self.infix("LIKE", pattern.into())
    }
}

impl Expression<bool> {
    /// `(self AND other)`.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        self.infix("AND", other)
    }

    /// `(self OR other)`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        self.infix("OR", other)
    }

    /// `(NOT self)`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::with_bindings(format!("(NOT {})", self.sql), self.bindings)
    }
}

impl<T: Value> From<T> for Expression<T> {
    fn from(value: T) -> Self {
        Self::value(value)
    }
}

impl From<&str> for Expression<String> {
    fn from(value: &str) -> Self {
        Self::value(String::from(value))
    }
}

impl<T> Expressible for Expression<T> {
    fn sql(&self) -> &str {
        &self.sql
    }

    fn bindings(&self) -> &[SqlValue] {
        &self.bindings
    }
}

impl<T> Clone for Expression<T> {
    fn clone(&self) -> Self {
        Self::with_bindings(self.sql.clone(), self.bindings.clone())
    }
}

impl<T> fmt::Debug for Expression<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("sql", &self.sql)
            .field("bindings", &self.bindings)
            .finish()
    }
}

impl<T> PartialEq for Expression<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sql == other.sql && self.bindings == other.bindings
    }
}

/// Joins expressions with `separator`.
///
/// The text is `a.sql + separator + b.sql + ...` and the bindings are
/// `a.bindings ++ b.bindings ++ ...`, both in input order.
pub fn join<I>(separator: &str, items: I) -> Expression<()>
where
    I: IntoIterator,
    I::Item: Expressible,
{
    let mut sql = String::new();
    let mut bindings = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            sql.push_str(separator);
        }
        sql.push_str(item.sql());
        bindings.extend_from_slice(item.bindings());
    }
    Expression::with_bindings(sql, bindings)
}

/// Rewrites a dotted reference into the form `REFERENCES` expects.
///
/// `users.id` becomes `users(id)`. Text without a dot is returned as is.
/// Every dot is replaced and a single `)` appended, so `main.users.id`
/// becomes `main(users(id)`.
#[must_use]
pub fn namespace<T>(expression: &Expression<T>) -> Expression<T> {
    if !expression.sql.contains('.') {
        return expression.clone();
    }
    let reference = expression.sql.replace('.', "(");
    Expression::with_bindings(format!("{reference})"), expression.bindings.clone())
}
