// Code generated by strata. DO NOT EDIT.

//! Rows of `main.users`.

use rusqlite::{Connection, Row, params_from_iter};
use strata_query::{Field, WhereClause, render_where};

/// A row of `users`.
#[derive(Debug, Clone, PartialEq)]
pub struct Users {
    /// `id` INTEGER, primary key
    pub id: i64,
    /// `email` TEXT
    pub email: Option<String>,
    /// `display_name` TEXT
    pub display_name: String,
}

pub const ID: Field<i64> = Field::new("id");
pub const EMAIL: Field<Option<String>> = Field::new("email");
pub const DISPLAY_NAME: Field<String> = Field::new("display_name");

const COLUMNS: &str = "id, email, display_name";

impl Users {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            email: row.get(1)?,
            display_name: row.get(2)?,
        })
    }
}

/// Rows of `users` matching `condition`.
pub fn query(conn: &Connection, condition: &dyn WhereClause) -> rusqlite::Result<Vec<Users>> {
    let (condition, values) = render_where(condition);
    let sql = format!("SELECT {COLUMNS} FROM \"main\".\"users\" WHERE {condition}");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), Users::from_row)?;
    rows.collect()
}
