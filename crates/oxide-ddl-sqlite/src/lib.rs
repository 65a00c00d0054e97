//! # oxide-ddl-sqlite
//!
//! Runs `oxide-ddl-core` schema statements against SQLite through `sqlx`.
//!
//! [`Database`] implements [`Connection`](oxide_ddl_core::Connection):
//! preparing a statement captures its text and bindings, and
//! [`Statement::run`] binds the values in order and executes it.
//!
//! # Things to know about SQLite
//!
//! - SQLite does not accept bound parameters inside `CREATE TABLE`. A
//!   `DEFAULT ?` or a `CHECK` comparing against a value is rejected when the
//!   statement runs, and the engine's message is returned as
//!   [`Error::Database`]. Checks that only compare columns bind nothing and
//!   run fine.
//! - Every connection to `sqlite::memory:` opens a separate database, so
//!   keep `DatabaseConfig::max_connections` at 1 for in-memory use.
//! - `sqlx` turns on `PRAGMA foreign_keys` for every connection, so
//!   `REFERENCES` and `FOREIGN KEY` clauses are enforced.
//!
//! ## Example
//!
//! ```rust,no_run
//! use oxide_ddl_core::builder::col;
//! use oxide_ddl_core::schema::{ColumnOptions, Dependency, ForeignKey};
//! use oxide_ddl_sqlite::{Database, DatabaseConfig};
//!
//! # async fn example() -> oxide_ddl_sqlite::Result<()> {
//! let db = Database::connect(&DatabaseConfig::from_env()?).await?;
//!
//! let id = col::<i64>("id");
//! let author_id = col::<i64>("author_id");
//!
//! db.create_table("users", |t| {
//!     t.column(&id, ColumnOptions::new().primary_key());
//! })
//! .await?;
//!
//! let users = db.table("users");
//! db.create_table("posts", |t| {
//!     t.column(&id, ColumnOptions::new().primary_key());
//!     t.column(&author_id, ColumnOptions::new().not_null());
//!     t.foreign_key(
//!         &author_id,
//!         ForeignKey::references(&users.column("id")).on_delete(Dependency::Cascade),
//!     );
//! })
//! .await?;
//!
//! db.drop_table("posts").await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod database;
mod error;
mod statement;

pub use config::{DatabaseConfig, DATABASE_MAX_CONNECTIONS, DATABASE_URL};
pub use database::Database;
pub use error::{Error, Result};
pub use statement::Statement;
