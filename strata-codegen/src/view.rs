//! The resolved view templates render against.
//!
//! Built from the schema model without changing it: every entity gains the
//! `name_conversion` output as `name` (keeping the database name as
//! `db_name`) and every column gains its resolved `type`.

use std::collections::BTreeSet;

use minijinja::context;
use serde::Serialize;
use strata_schema::{Column, Schema, Table};

use crate::{Result, TemplateEnv, TypeResolver};

/// Template name the `name_conversion` setting is registered under.
pub const NAME_TEMPLATE: &str = "name_conversion";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaView {
    pub name: String,
    pub db_name: String,
    pub tables: Vec<TableView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub name: String,
    pub db_name: String,
    /// Database name of the owning schema.
    pub schema: String,
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub name: String,
    pub db_name: String,
    pub db_type: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub nullable: bool,
    pub ordinal: u32,
    pub primary_key: bool,
}

/// Builds views, recording every raw type the resolver was asked for.
pub struct ViewBuilder<'a> {
    env: &'a TemplateEnv,
    resolver: &'a TypeResolver,
    dereferenced: BTreeSet<String>,
}

impl<'a> ViewBuilder<'a> {
    pub fn new(env: &'a TemplateEnv, resolver: &'a TypeResolver) -> Self {
        Self {
            env,
            resolver,
            dereferenced: BTreeSet::new(),
        }
    }

    pub fn schema(&mut self, schema: &Schema) -> Result<SchemaView> {
        let entity = format!("schema '{}'", schema.name);
        Ok(SchemaView {
            name: self.convert_name(&schema.name, &entity)?,
            db_name: schema.name.clone(),
            tables: schema
                .tables
                .iter()
                .map(|table| self.table(table))
                .collect::<Result<_>>()?,
        })
    }

    pub fn table(&mut self, table: &Table) -> Result<TableView> {
        let entity = format!("table '{}'", table.qualified_name());
        Ok(TableView {
            name: self.convert_name(&table.name, &entity)?,
            db_name: table.name.clone(),
            schema: table.schema.clone(),
            columns: table
                .columns
                .iter()
                .map(|column| self.column(table, column))
                .collect::<Result<_>>()?,
        })
    }

    fn column(&mut self, table: &Table, column: &Column) -> Result<ColumnView> {
        self.dereferenced.insert(column.db_type.clone());
        let ty = self.resolver.resolve_column(table, column)?.to_string();
        let entity = format!("column '{}.{}'", table.qualified_name(), column.name);
        Ok(ColumnView {
            name: self.convert_name(&column.name, &entity)?,
            db_name: column.name.clone(),
            db_type: column.db_type.clone(),
            ty,
            nullable: column.nullable,
            ordinal: column.ordinal,
            primary_key: column.primary_key,
        })
    }

    fn convert_name(&self, db_name: &str, entity: &str) -> Result<String> {
        self.env
            .render(NAME_TEMPLATE, entity, context! { name => db_name })
    }

    /// Raw types looked up so far, sorted.
    pub fn into_dereferenced(self) -> BTreeSet<String> {
        self.dereferenced
    }
}
