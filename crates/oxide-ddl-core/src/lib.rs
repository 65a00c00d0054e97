//! # oxide-ddl-core
//!
//! A type-safe `CREATE TABLE` builder.
//!
//! This crate provides:
//! - Typed expressions that carry their bound values next to their SQL text
//! - A [`join`](builder::join) combinator that keeps text and bindings in step
//! - A schema builder for columns, primary keys, unique, check and foreign
//!   key constraints
//! - A [`Connection`] trait through which finished statements are prepared
//!
//! ## Declaring a table
//!
//! ```rust
//! use oxide_ddl_core::builder::col;
//! use oxide_ddl_core::schema::{ColumnOptions, Table};
//! use oxide_ddl_core::{Connection, SqlValue};
//!
//! /// Returns what it was asked to prepare.
//! struct Echo;
//!
//! impl Connection for Echo {
//!     type Statement = (String, Vec<SqlValue>);
//!     type Error = std::convert::Infallible;
//!
//!     fn prepare(&self, sql: &str, bindings: Vec<SqlValue>) -> Result<Self::Statement, Self::Error> {
//!         Ok((sql.to_string(), bindings))
//!     }
//! }
//!
//! let users = Table::new("users", &Echo);
//! let id = col::<i64>("id");
//! let name = col::<String>("name");
//!
//! let (sql, bindings) = users
//!     .create(|t| {
//!         t.column(&id, ColumnOptions::new().primary_key());
//!         t.column(&name, ColumnOptions::new().not_null().default_value(String::from("anon")));
//!     })
//!     .unwrap();
//!
//! assert_eq!(sql, "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL DEFAULT ?)");
//! assert_eq!(bindings, vec![SqlValue::Text(String::from("anon"))]);
//! ```
//!
//! ## SQL injection prevention
//!
//! Default values and the operands of check conditions are always bound to
//! `?` placeholders; they never appear in the SQL text.

pub mod builder;
pub mod connection;
pub mod schema;

pub use builder::{col, Expressible, Expression, SqlValue, Value};
pub use connection::Connection;
pub use schema::{SchemaBuilder, Table};
