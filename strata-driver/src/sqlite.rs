//! SQLite introspection via `sqlite_master`, `pragma_table_info` and `pragma_table_list`.
//!
//! SQLite's "schemas" are the attached database names (`main`, `temp`, and
//! anything added with `ATTACH`). The connection is opened read-only so a
//! mistyped path fails instead of creating an empty database.

use rusqlite::{Connection, OpenFlags, params};
use strata_schema::{Column, Schema, Table};

use crate::{Driver, DriverError};

/// Driver for SQLite database files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDriver;

impl Driver for SqliteDriver {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn introspect(&self, conn_str: &str, schemas: &[String]) -> Result<Vec<Schema>, DriverError> {
        let conn = open(conn_str)?;
        let available = database_names(&conn)?;

        schemas
            .iter()
            .map(|name| {
                if !available.iter().any(|a| a == name) {
                    return Err(DriverError::UnknownSchema {
                        schema: name.clone(),
                        available: available.join(", "),
                    });
                }
                read_schema(&conn, name)
            })
            .collect()
    }
}

fn open(conn_str: &str) -> Result<Connection, DriverError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(conn_str, flags).map_err(|e| DriverError::Connect {
        conn_str: conn_str.to_string(),
        source: e.into(),
    })
}

fn database_names(conn: &Connection) -> Result<Vec<String>, DriverError> {
    let query = || -> rusqlite::Result<Vec<String>> {
        let mut stmt = conn.prepare("SELECT name FROM pragma_database_list ORDER BY seq")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect()
    };
    query().map_err(|e| DriverError::query("database list", e))
}

fn read_schema(conn: &Connection, name: &str) -> Result<Schema, DriverError> {
    let mut schema = Schema::new(name);
    for table_name in table_names(conn, name)? {
        let table = read_table(conn, name, &table_name)?;
        schema.push_table(table)?;
    }
    log::debug!(
        "sqlite: schema '{}' has {} tables",
        name,
        schema.tables.len()
    );
    Ok(schema)
}

fn table_names(conn: &Connection, schema: &str) -> Result<Vec<String>, DriverError> {
    let sql = format!(
        "SELECT name FROM {}.sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
         ORDER BY name",
        quote_ident(schema)
    );
    let query = || -> rusqlite::Result<Vec<String>> {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        rows.collect()
    };
    query().map_err(|e| DriverError::query(format!("tables of schema '{}'", schema), e))
}

/// A `pragma_table_info` row.
struct ColumnInfo {
    cid: i64,
    name: String,
    db_type: String,
    not_null: bool,
    pk: i64,
}

fn read_table(conn: &Connection, schema: &str, name: &str) -> Result<Table, DriverError> {
    let query = || -> rusqlite::Result<(Vec<ColumnInfo>, bool)> {
        let mut stmt = conn.prepare(
            "SELECT cid, name, type, \"notnull\", pk \
             FROM pragma_table_info(?1, ?2) ORDER BY cid",
        )?;
        let rows = stmt.query_map(params![name, schema], |row| {
            Ok(ColumnInfo {
                cid: row.get(0)?,
                name: row.get(1)?,
                db_type: row.get(2)?,
                not_null: row.get(3)?,
                pk: row.get(4)?,
            })
        })?;
        let columns = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        let without_rowid: bool = conn.query_row(
            "SELECT wr FROM pragma_table_list WHERE schema = ?1 AND name = ?2",
            params![schema, name],
            |row| row.get(0),
        )?;
        Ok((columns, without_rowid))
    };

    let (infos, without_rowid) = query()
        .map_err(|e| DriverError::query(format!("columns of '{}.{}'", schema, name), e))?;

    // SQLite only enforces NOT NULL on a key that aliases the rowid or
    // belongs to a WITHOUT ROWID table.
    let key_columns = infos.iter().filter(|c| c.pk > 0).count();
    let columns = infos
        .into_iter()
        .map(|info| {
            let rowid_alias = !without_rowid
                && key_columns == 1
                && info.db_type.eq_ignore_ascii_case("INTEGER");
            let key_not_null = info.pk > 0 && (without_rowid || rowid_alias);
            let mut column = Column::new(
                info.name,
                info.db_type,
                !info.not_null && !key_not_null,
                u32::try_from(info.cid + 1).unwrap_or(u32::MAX),
            );
            column.primary_key = info.pk > 0;
            column
        })
        .collect();

    Ok(Table {
        name: name.to_string(),
        schema: schema.to_string(),
        columns,
    })
}

/// Quote an identifier for interpolation into SQL.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
