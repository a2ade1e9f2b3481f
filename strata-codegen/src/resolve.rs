//! Raw database type → output type lookup.

use indexmap::IndexMap;
use strata_schema::{Column, Table};

use crate::{Error, Result};

/// Maps raw column types to output types.
///
/// Nullable columns are looked up only in the nullable map and NOT NULL
/// columns only in the plain map. A type missing from the map it needs is an
/// error even when the other map has it.
#[derive(Debug, Clone, Default)]
pub struct TypeResolver {
    type_map: IndexMap<String, String>,
    nullable_type_map: IndexMap<String, String>,
}

impl TypeResolver {
    pub fn new(
        type_map: IndexMap<String, String>,
        nullable_type_map: IndexMap<String, String>,
    ) -> Self {
        Self {
            type_map,
            nullable_type_map,
        }
    }

    /// Output type for `raw_type`, or `None` when unmapped.
    pub fn resolve(&self, raw_type: &str, nullable: bool) -> Option<&str> {
        let map = if nullable {
            &self.nullable_type_map
        } else {
            &self.type_map
        };
        map.get(raw_type).map(String::as_str)
    }

    /// Output type for a column, naming the column when unmapped.
    pub fn resolve_column(&self, table: &Table, column: &Column) -> Result<&str> {
        self.resolve(&column.db_type, column.nullable)
            .ok_or_else(|| Error::MissingTypeMapping {
                raw_type: column.db_type.clone(),
                nullable: column.nullable,
                schema: table.schema.clone(),
                table: table.name.clone(),
                column: column.name.clone(),
            })
    }
}
