//! Manifest types and parsing for strata.toml files.

mod file;
mod filter;
mod parse;
mod post_run;
mod validate;

use std::path::PathBuf;

pub use file::StrataToml;
pub use filter::TableFilter;
use indexmap::IndexMap;
pub use post_run::{FILE_TOKEN, PostRun};
use serde::Deserialize;
pub use validate::ParseContext;

/// Name conversion applied when `name_conversion` is not set.
pub const DEFAULT_NAME_CONVERSION: &str = "{{ name | pascal }}";

/// Root manifest for strata.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Connection string handed to the driver
    pub conn_str: String,

    /// Driver identifier (e.g. "sqlite")
    pub db_type: String,

    /// Schema names to introspect
    pub schemas: Vec<String>,

    /// Template turning a database name into the identifier exposed as `.name`
    #[serde(default = "default_name_conversion")]
    pub name_conversion: String,

    /// Only generate for these tables (`table` or `schema.table`)
    #[serde(default)]
    pub include_tables: Vec<String>,

    /// Generate for every table except these (`table` or `schema.table`)
    #[serde(default)]
    pub exclude_tables: Vec<String>,

    /// Command run on every generated file; `$STRATAFILE` is replaced with its path
    #[serde(default)]
    pub post_run: Vec<String>,

    /// Directory generated paths are relative to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Output path template → schema-level content template
    #[serde(default)]
    pub schema_paths: IndexMap<String, PathBuf>,

    /// Output path template → table-level content template
    #[serde(default)]
    pub table_paths: IndexMap<String, PathBuf>,

    /// Raw database type → output type for NOT NULL columns
    #[serde(default)]
    pub type_map: IndexMap<String, String>,

    /// Raw database type → output type for nullable columns
    #[serde(default)]
    pub nullable_type_map: IndexMap<String, String>,

    /// Free-form values passed to every template as `params`
    #[serde(default)]
    pub params: toml::Table,
}

fn default_name_conversion() -> String {
    DEFAULT_NAME_CONVERSION.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Manifest {
    /// The configured post-run command, if any.
    pub fn post_run(&self) -> Option<PostRun> {
        PostRun::from_argv(&self.post_run)
    }

    /// The include/exclude table filter.
    pub fn table_filter(&self) -> TableFilter {
        if !self.include_tables.is_empty() {
            TableFilter::Include(self.include_tables.clone())
        } else if !self.exclude_tables.is_empty() {
            TableFilter::Exclude(self.exclude_tables.clone())
        } else {
            TableFilter::All
        }
    }
}
