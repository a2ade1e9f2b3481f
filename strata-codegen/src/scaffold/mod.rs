//! Starter files written by `strata init`.
//!
//! None of them overwrite an existing file, so running `init` again only
//! restores what was deleted.

use std::path::{Path, PathBuf};

use strata_core::{FileRules, GeneratedFile, Overwrite};

const CONFIG: &str = include_str!("templates/strata.toml");
const SCHEMA_TEMPLATE: &str = include_str!("templates/schema.rs.j2");
const TABLE_TEMPLATE: &str = include_str!("templates/table.rs.j2");

fn if_missing() -> FileRules {
    FileRules {
        overwrite: Overwrite::IfMissing,
    }
}

/// `strata.toml` for a SQLite database, wired to the two starter templates.
pub struct ConfigToml;

impl GeneratedFile for ConfigToml {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("strata.toml")
    }

    fn rules(&self) -> FileRules {
        if_missing()
    }

    fn render(&self) -> String {
        CONFIG.to_string()
    }
}

/// Schema-level template: a `mod.rs` declaring one module per table.
pub struct SchemaTemplate;

impl GeneratedFile for SchemaTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("templates").join("schema.rs.j2")
    }

    fn rules(&self) -> FileRules {
        if_missing()
    }

    fn render(&self) -> String {
        SCHEMA_TEMPLATE.to_string()
    }
}

/// Table-level template: a row struct, typed column fields for building
/// conditions, and a `query` function.
pub struct TableTemplate;

impl GeneratedFile for TableTemplate {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("templates").join("table.rs.j2")
    }

    fn rules(&self) -> FileRules {
        if_missing()
    }

    fn render(&self) -> String {
        TABLE_TEMPLATE.to_string()
    }
}

/// Every starter file, in the order `init` writes them.
pub fn init_files() -> Vec<Box<dyn GeneratedFile>> {
    vec![
        Box::new(ConfigToml),
        Box::new(SchemaTemplate),
        Box::new(TableTemplate),
    ]
}
