//! Typed, parameter-bound SQL expressions.
//!
//! # Example
//!
//! ```rust
//! use oxide_ddl_core::builder::{col, join, Expressible, SqlValue};
//!
//! let age = col::<i64>("age");
//! let check = age.clone().gt_eq(18_i64).and(age.lt(130_i64));
//!
//! assert_eq!(check.sql(), "((age >= ?) AND (age < ?))");
//! assert_eq!(check.bindings(), &[SqlValue::Int(18), SqlValue::Int(130)]);
//!
//! let list = join(", ", [col::<i64>("a"), col::<i64>("b")]);
//! assert_eq!(list.sql(), "a, b");
//! ```

mod expr;
pub mod value;

pub use expr::{col, join, namespace, Expressible, Expression};
pub use value::{SqlValue, ToSqlValue, Value};
