//! Preview formats: what templates would see, without writing anything.

use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::{Error, Result, SchemaView};

/// Output format of `strata preview`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewFormat {
    /// Aligned columns, one row per column.
    #[default]
    Tabular,
    Yaml,
    Json,
    /// Distinct raw column types, one per line.
    Types,
}

impl PreviewFormat {
    pub const ALL: [PreviewFormat; 4] = [
        PreviewFormat::Tabular,
        PreviewFormat::Yaml,
        PreviewFormat::Json,
        PreviewFormat::Types,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PreviewFormat::Tabular => "tabular",
            PreviewFormat::Yaml => "yaml",
            PreviewFormat::Json => "json",
            PreviewFormat::Types => "types",
        }
    }

    /// Whether the format needs resolved types. `types` only needs the
    /// schema model, so it works before the type maps are complete.
    pub fn needs_resolution(self) -> bool {
        !matches!(self, PreviewFormat::Types)
    }
}

impl fmt::Display for PreviewFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognized preview format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preview format '{0}' (expected tabular, yaml, json or types)")]
pub struct UnknownFormat(pub String);

impl FromStr for PreviewFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        PreviewFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == lower)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Render resolved views in `format`.
pub fn format_views(format: PreviewFormat, views: &[SchemaView]) -> Result<String> {
    match format {
        PreviewFormat::Tabular => Ok(format_tabular(views)),
        PreviewFormat::Types => Ok(format_types(views.iter().flat_map(|schema| {
            schema
                .tables
                .iter()
                .flat_map(|table| table.columns.iter().map(|c| c.db_type.as_str()))
        }))),
        PreviewFormat::Yaml => serde_yaml::to_string(views).map_err(|e| Error::Serialize {
            format: "yaml",
            source: e.into(),
        }),
        PreviewFormat::Json => serde_json::to_string_pretty(views)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| Error::Serialize {
                format: "json",
                source: e.into(),
            }),
    }
}

/// One raw type per line, sorted and deduplicated.
pub fn format_types<'a>(types: impl IntoIterator<Item = &'a str>) -> String {
    let types: BTreeSet<&str> = types.into_iter().collect();
    types.into_iter().map(|t| format!("{t}\n")).collect()
}

/// Aligned columns of schema, table, column, raw type, resolved type and
/// nullability.
pub fn format_tabular(views: &[SchemaView]) -> String {
    let header = ["SCHEMA", "TABLE", "COLUMN", "DB TYPE", "TYPE", "NULLABLE"].map(String::from);
    let mut rows = vec![header];
    for schema in views {
        for table in &schema.tables {
            for column in &table.columns {
                rows.push([
                    schema.db_name.clone(),
                    table.db_name.clone(),
                    column.db_name.clone(),
                    column.db_type.clone(),
                    column.ty.clone(),
                    if column.nullable { "yes" } else { "no" }.to_string(),
                ]);
            }
        }
    }

    let mut widths = [0usize; 6];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
