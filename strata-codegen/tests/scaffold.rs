//! `strata init` output generates code against a real database, and that
//! code runs.

use std::{str::FromStr, sync::Arc};

use rusqlite::Connection;
use strata_codegen::{Project, generate, scaffold::init_files};
use strata_driver::SqliteDriver;
use strata_manifest::Manifest;
use strata_query::{And, Or};
use tempfile::TempDir;

/// What the starter templates produce for [`USERS`].
#[allow(dead_code)]
#[path = "generated/users.rs"]
mod users;

const USERS: &str =
    "CREATE TABLE users (id INTEGER PRIMARY KEY, email TEXT, display_name TEXT NOT NULL);";

#[test]
fn test_starter_project_generates() {
    let temp = TempDir::new().unwrap();
    for file in init_files() {
        file.write(temp.path()).unwrap();
    }
    let db = temp.path().join("app.db");
    Connection::open(&db)
        .unwrap()
        .execute_batch(&format!(
            "{USERS}\nCREATE TABLE posts (id INTEGER PRIMARY KEY, body BLOB);"
        ))
        .unwrap();

    let content = std::fs::read_to_string(temp.path().join("strata.toml")).unwrap();
    let mut manifest = Manifest::from_str(&content).unwrap();
    manifest.conn_str = db.display().to_string();

    let report = generate(Project::new(manifest, temp.path()), Arc::new(SqliteDriver)).unwrap();

    let out = temp.path().join("src/db/main");
    assert_eq!(
        report.files,
        vec![out.join("mod.rs"), out.join("posts.rs"), out.join("users.rs")]
    );

    let module = std::fs::read_to_string(out.join("mod.rs")).unwrap();
    assert!(module.ends_with("pub mod posts;\npub mod users;\n"), "{module}");

    assert_eq!(
        std::fs::read_to_string(out.join("users.rs")).unwrap(),
        include_str!("generated/users.rs")
    );
}

fn users_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "{USERS}
         INSERT INTO users VALUES
             (1, 'ann@example.com', 'Ann'),
             (2, NULL, 'Bob'),
             (3, 'cid@example.com', 'Cid'),
             (4, 'dee@example.com', 'Dee');"
    ))
    .unwrap();
    conn
}

fn ids(rows: &[users::Users]) -> Vec<i64> {
    rows.iter().map(|r| r.id).collect()
}

#[test]
fn test_generated_query_binds_composed_condition() {
    let conn = users_db();
    let condition = And::new().with(users::ID.greater_than(1)).with(
        users::DISPLAY_NAME.is_in(["Bob", "Dee", "Zed"].map(String::from)),
    );

    let rows = users::query(&conn, &condition).unwrap();

    assert_eq!(
        rows,
        vec![
            users::Users {
                id: 2,
                email: None,
                display_name: "Bob".to_string(),
            },
            users::Users {
                id: 4,
                email: Some("dee@example.com".to_string()),
                display_name: "Dee".to_string(),
            },
        ]
    );
}

#[test]
fn test_generated_query_with_nested_or() {
    let conn = users_db();
    let condition = Or::new()
        .with(users::EMAIL.equals(Some("ann@example.com".to_string())))
        .with(
            And::new()
                .with(users::ID.less_or_equal(3))
                .with(users::EMAIL.is_in([Some("cid@example.com".to_string())])),
        );

    assert_eq!(ids(&users::query(&conn, &condition).unwrap()), vec![1, 3]);
}

#[test]
fn test_generated_query_with_empty_in_matches_nothing() {
    let conn = users_db();
    let condition = users::ID.is_in(Vec::<i64>::new());

    assert!(users::query(&conn, &condition).unwrap().is_empty());
}
