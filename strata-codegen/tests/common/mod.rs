//! Fixture projects backed by a temporary SQLite database, plus a fixed
//! in-memory driver for exact schema models.

#![allow(dead_code)]

use std::{path::Path, str::FromStr, sync::Arc};

use rusqlite::Connection;
use strata_codegen::Project;
use strata_driver::{Driver, DriverError, SqliteDriver};
use strata_manifest::Manifest;
use strata_schema::{Column, Schema, Table};
use tempfile::TempDir;

/// `users` with a non-null `INT` and a nullable `TEXT`, spelled the way
/// SQLite reports declared types.
pub const USERS: &str = "CREATE TABLE users (id INT NOT NULL, email TEXT);";

/// Comma-joined `db_name:type` for every column.
pub const COLUMN_LIST: &str = "{% for column in table.columns %}{{ column.db_name }}:{{ column.type }}{% if not loop.last %},{% endif %}{% endfor %}";

/// Mappings for [`USERS`] as introspected from SQLite.
pub const TYPE_MAPS: &str = r#"
[type_map]
INT = "Int32"
TEXT = "String"

[nullable_type_map]
TEXT = "OptionalString"
"#;

/// Mappings for [`users_model`].
pub const MODEL_TYPE_MAPS: &str = r#"
[type_map]
int = "Int32"
text = "String"

[nullable_type_map]
text = "OptionalString"
"#;

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// A temp directory holding `app.db` created from `ddl`.
    pub fn new(ddl: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let conn = Connection::open(dir.path().join("app.db")).unwrap();
        conn.execute_batch(ddl).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn template(&self, name: &str, source: &str) -> &Self {
        let path = self.path().join("templates").join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, source).unwrap();
        self
    }

    /// A project whose manifest is `body` plus connection settings pointing at
    /// `app.db`, writing into `out/`.
    pub fn project(&self, body: &str) -> Project {
        let conn_str = self.path().join("app.db");
        let manifest = Manifest::from_str(&format!(
            "conn_str = '{}'\ndb_type = \"sqlite\"\nschemas = [\"main\"]\noutput_dir = \"out\"\n{body}",
            conn_str.display()
        ))
        .unwrap();
        Project::new(manifest, self.path())
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path().join(relative)).unwrap()
    }
}

pub fn sqlite() -> Arc<dyn Driver> {
    Arc::new(SqliteDriver)
}

/// Returns clones of fixed schemas, ignoring the connection string.
pub struct FixedDriver(pub Vec<Schema>);

impl Driver for FixedDriver {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn introspect(&self, _conn_str: &str, schemas: &[String]) -> Result<Vec<Schema>, DriverError> {
        schemas
            .iter()
            .map(|name| {
                self.0
                    .iter()
                    .find(|s| &s.name == name)
                    .cloned()
                    .ok_or_else(|| DriverError::UnknownSchema {
                        schema: name.clone(),
                        available: "main".to_string(),
                    })
            })
            .collect()
    }
}

/// `main.users(id int not null, email text nullable)`.
pub fn users_model() -> Arc<dyn Driver> {
    Arc::new(FixedDriver(vec![
        Schema::new("main").with_table(
            Table::new("main", "users")
                .with_column(Column::new("id", "int", false, 1))
                .with_column(Column::new("email", "text", true, 2)),
        ),
    ]))
}
