//! Schemas, tables and columns.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A database schema and its tables, in driver order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name as reported by the database.
    pub name: String,
    /// Tables in the order the driver reported them.
    pub tables: Vec<Table>,
}

/// A table name appeared twice in the same schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("table '{schema}.{table}' is defined more than once")]
pub struct DuplicateTable {
    pub schema: String,
    pub table: String,
}

impl Schema {
    /// Create an empty schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    /// Append a table, rejecting a second table with the same name.
    pub fn push_table(&mut self, mut table: Table) -> Result<(), DuplicateTable> {
        if self.table(&table.name).is_some() {
            return Err(DuplicateTable {
                schema: self.name.clone(),
                table: table.name,
            });
        }
        table.schema = self.name.clone();
        self.tables.push(table);
        Ok(())
    }

    /// Builder form of [`Schema::push_table`].
    ///
    /// # Panics
    ///
    /// Panics on a duplicate table name. Drivers should use `push_table`.
    pub fn with_table(mut self, table: Table) -> Self {
        if let Err(e) = self.push_table(table) {
            panic!("{e}");
        }
        self
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Every raw column type in this schema, in encounter order (may repeat).
    pub fn db_types(&self) -> impl Iterator<Item = &str> {
        self.tables
            .iter()
            .flat_map(|t| t.columns.iter().map(|c| c.db_type.as_str()))
    }
}

/// The distinct raw column types across several schemas, sorted.
pub fn db_types<'a>(schemas: impl IntoIterator<Item = &'a Schema>) -> BTreeSet<&'a str> {
    schemas.into_iter().flat_map(Schema::db_types).collect()
}

/// A table and its columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name as reported by the database.
    pub name: String,
    /// Name of the owning schema (a back-reference, not ownership).
    pub schema: String,
    /// Columns in ordinal order.
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column.
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Qualified `schema.table` name, used in diagnostics.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

/// A single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name as reported by the database.
    pub name: String,
    /// Raw type string as reported by the database.
    pub db_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// 1-based position within the table.
    pub ordinal: u32,
    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,
}

impl Column {
    pub fn new(
        name: impl Into<String>,
        db_type: impl Into<String>,
        nullable: bool,
        ordinal: u32,
    ) -> Self {
        Self {
            name: name.into(),
            db_type: db_type.into(),
            nullable,
            ordinal,
            primary_key: false,
        }
    }

    /// Mark the column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }
}
