//! Runs generated schema statements against an in-memory SQLite database.

use oxide_ddl_core::builder::col;
use oxide_ddl_core::schema::{Collation, ColumnOptions, Dependency, ForeignKey};
use oxide_ddl_core::{Connection, SqlValue};
use oxide_ddl_sqlite::{Database, DatabaseConfig, Error};

async fn create_test_db() -> Database {
    Database::connect(&DatabaseConfig::default()).await.unwrap()
}

/// (name, declared type, not null, primary key) for every column of `table`.
async fn table_info(db: &Database, table: &str) -> Vec<(String, String, i64, i64)> {
    sqlx::query_as(&format!(
        "SELECT name, type, \"notnull\", pk FROM pragma_table_info('{table}') ORDER BY cid"
    ))
    .fetch_all(db.pool())
    .await
    .unwrap()
}

async fn create_users(db: &Database) {
    let id = col::<i64>("id");
    let email = col::<String>("email");
    db.create_table("users", |t| {
        t.column(&id, ColumnOptions::new().primary_key());
        t.column(
            &email,
            ColumnOptions::new()
                .not_null()
                .unique()
                .collate(Collation::NoCase),
        );
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_create_table_columns() {
    let db = create_test_db().await;
    create_users(&db).await;

    assert_eq!(
        table_info(&db, "users").await,
        vec![
            (String::from("id"), String::from("INTEGER"), 0, 1),
            (String::from("email"), String::from("TEXT"), 1, 0),
        ]
    );
}

#[tokio::test]
async fn test_create_table_returns_statement_that_ran() {
    let db = create_test_db().await;
    let id = col::<i64>("id");
    let statement = db
        .create_table("things", |t| t.column(&id, ColumnOptions::new()))
        .await
        .unwrap();

    assert_eq!(statement.sql(), "CREATE TABLE things (id INTEGER)");
    assert!(statement.bindings().is_empty());
}

#[tokio::test]
async fn test_collation_and_unique_are_enforced() {
    let db = create_test_db().await;
    create_users(&db).await;

    db.prepare(
        "INSERT INTO users (email) VALUES (?)",
        vec![SqlValue::Text(String::from("a@example.com"))],
    )
    .unwrap()
    .run()
    .await
    .unwrap();

    // NOCASE makes the upper-case address a duplicate.
    let err = db
        .prepare(
            "INSERT INTO users (email) VALUES (?)",
            vec![SqlValue::Text(String::from("A@EXAMPLE.COM"))],
        )
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Database(_)));
    assert!(err.to_string().contains("UNIQUE"));
}

#[tokio::test]
async fn test_foreign_key_is_enforced() {
    let db = create_test_db().await;
    create_users(&db).await;

    let users = db.table("users");
    let id = col::<i64>("id");
    let author_id = col::<i64>("author_id");
    db.create_table("posts", |t| {
        t.column(&id, ColumnOptions::new().primary_key());
        t.column(&author_id, ColumnOptions::new().not_null());
        t.foreign_key(
            &author_id,
            ForeignKey::references(&users.column("id")).on_delete(Dependency::Cascade),
        );
    })
    .await
    .unwrap();

    let err = db
        .prepare(
            "INSERT INTO posts (author_id) VALUES (?)",
            vec![SqlValue::Int(42)],
        )
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"));

    db.run("INSERT INTO users (id, email) VALUES (1, 'a@example.com')")
        .unwrap()
        .run()
        .await
        .unwrap();
    db.run("INSERT INTO posts (author_id) VALUES (1)")
        .unwrap()
        .run()
        .await
        .unwrap();

    // ON DELETE CASCADE removes the post with its author.
    db.run("DELETE FROM users WHERE id = 1")
        .unwrap()
        .run()
        .await
        .unwrap();
    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_column_check_without_bindings_runs() {
    let db = create_test_db().await;
    let low = col::<i64>("low");
    let high = col::<i64>("high");
    db.create_table("ranges", |t| {
        t.column(&low, ColumnOptions::new().not_null());
        t.column(
            &high,
            ColumnOptions::new().not_null().check(low.clone().lt_eq(high.clone())),
        );
        t.primary_key(&[&low, &high]);
    })
    .await
    .unwrap();

    db.run("INSERT INTO ranges (low, high) VALUES (1, 2)")
        .unwrap()
        .run()
        .await
        .unwrap();
    let err = db
        .run("INSERT INTO ranges (low, high) VALUES (3, 2)")
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("CHECK"));
}

#[tokio::test]
async fn test_negated_table_check_runs() {
    let db = create_test_db().await;
    let low = col::<i64>("low");
    let high = col::<i64>("high");
    db.create_table("spans", |t| {
        t.column(&low, ColumnOptions::new().not_null());
        t.column(&high, ColumnOptions::new().not_null());
        t.check(&low.clone().gt(high.clone()).not());
    })
    .await
    .unwrap();

    db.run("INSERT INTO spans (low, high) VALUES (1, 1)")
        .unwrap()
        .run()
        .await
        .unwrap();
    let err = db
        .run("INSERT INTO spans (low, high) VALUES (2, 1)")
        .unwrap()
        .run()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("CHECK"));
}

#[tokio::test]
async fn test_bound_default_is_rejected_by_engine() {
    let db = create_test_db().await;
    let name = col::<String>("name");

    let err = db
        .create_table("people", |t| {
            t.column(&name, ColumnOptions::new().default_value(String::from("anon")));
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Database(_)));
    // Nothing was created.
    assert!(table_info(&db, "people").await.is_empty());
}

#[tokio::test]
async fn test_duplicate_table_error_is_passed_through() {
    let db = create_test_db().await;
    create_users(&db).await;

    let id = col::<i64>("id");
    let err = db
        .create_table("users", |t| t.column(&id, ColumnOptions::new()))
        .await
        .unwrap_err();

    match err {
        Error::Database(sqlx::Error::Database(e)) => {
            assert!(e.message().contains("already exists"));
        }
        other => panic!("Expected database error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_drop_table() {
    let db = create_test_db().await;
    create_users(&db).await;

    let statement = db.drop_table("users").await.unwrap();
    assert_eq!(statement.sql(), "DROP TABLE users");
    assert!(table_info(&db, "users").await.is_empty());

    let err = db.drop_table("users").await.unwrap_err();
    assert!(err.to_string().contains("no such table"));
}

#[tokio::test]
async fn test_statement_binds_values_in_order() {
    let db = create_test_db().await;
    db.run("CREATE TABLE samples (n INTEGER, f REAL, t TEXT, b BLOB, flag INTEGER, missing TEXT)")
        .unwrap()
        .run()
        .await
        .unwrap();

    let inserted = db
        .prepare(
            "INSERT INTO samples VALUES (?, ?, ?, ?, ?, ?)",
            vec![
                SqlValue::Int(7),
                SqlValue::Float(1.5),
                SqlValue::Text(String::from("x")),
                SqlValue::Blob(vec![0xCA, 0xFE]),
                SqlValue::Bool(true),
                SqlValue::Null,
            ],
        )
        .unwrap()
        .run()
        .await
        .unwrap();
    assert_eq!(inserted, 1);

    let row: (i64, f64, String, Vec<u8>, bool, Option<String>) =
        sqlx::query_as("SELECT n, f, t, b, flag, missing FROM samples")
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert_eq!(
        row,
        (7, 1.5, String::from("x"), vec![0xCA, 0xFE], true, None)
    );
}
