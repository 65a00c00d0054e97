//! `CREATE TABLE` assembly.
//!
//! A [`Table`] names the target and borrows its connection. Its
//! [`Table::create`] runs a declaration block against a [`SchemaBuilder`],
//! which collects one clause per call and compiles them into a single
//! statement:
//!
//! ```rust
//! use oxide_ddl_core::builder::col;
//! use oxide_ddl_core::schema::{ColumnOptions, Dependency, ForeignKey, SchemaBuilder, Table};
//!
//! # struct Offline;
//! # impl oxide_ddl_core::Connection for Offline {
//! #     type Statement = ();
//! #     type Error = ();
//! #     fn prepare(&self, _: &str, _: Vec<oxide_ddl_core::SqlValue>) -> Result<(), ()> { Ok(()) }
//! # }
//! let users = Table::new("users", &Offline);
//! let posts = Table::new("posts", &Offline);
//!
//! let id = col::<i64>("id");
//! let author_id = col::<i64>("author_id");
//! let title = col::<String>("title");
//!
//! let mut t = SchemaBuilder::new(&posts);
//! t.column(&id, ColumnOptions::new().primary_key());
//! t.column(&title, ColumnOptions::new().not_null().default_value(String::from("untitled")));
//! t.column(&author_id, ColumnOptions::new());
//! t.foreign_key(
//!     &author_id,
//!     ForeignKey::references(&users.column("id")).on_delete(Dependency::Cascade),
//! );
//!
//! let (sql, bindings) = t.build();
//! assert_eq!(
//!     sql,
//!     "CREATE TABLE posts (id INTEGER PRIMARY KEY, title TEXT NOT NULL DEFAULT ?, \
//!      author_id INTEGER, FOREIGN KEY(author_id) REFERENCES users(id) ON DELETE CASCADE)"
//! );
//! assert_eq!(bindings.len(), 1);
//! ```

mod builder;
mod column;
mod constraint;
mod table;

pub use builder::SchemaBuilder;
pub use column::{Collation, ColumnModifier, ColumnOptions};
pub use constraint::{Dependency, ForeignKey};
pub use table::Table;
