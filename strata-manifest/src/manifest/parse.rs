//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "strata.toml")
    }
}

impl Manifest {
    /// Parse a strata.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a strata.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    ParseContext::new(content, filename).validate(&manifest)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{DEFAULT_NAME_CONVERSION, TableFilter};

    const MINIMAL: &str = r#"
        conn_str = "app.db"
        db_type = "sqlite"
        schemas = ["main"]
    "#;

    #[test]
    fn test_minimal_defaults() {
        let manifest = Manifest::from_str(MINIMAL).unwrap();

        assert_eq!(manifest.db_type, "sqlite");
        assert_eq!(manifest.schemas, vec!["main"]);
        assert_eq!(manifest.name_conversion, DEFAULT_NAME_CONVERSION);
        assert_eq!(manifest.output_dir, PathBuf::from("."));
        assert!(manifest.post_run().is_none());
        assert_eq!(manifest.table_filter(), TableFilter::All);
        assert!(manifest.type_map.is_empty());
        assert!(manifest.params.is_empty());
    }

    #[test]
    fn test_full_manifest_keeps_order() {
        let manifest = Manifest::from_str(
            r#"
            conn_str = "file:app.db?mode=ro"
            db_type = "sqlite"
            schemas = ["main", "audit"]
            name_conversion = "{{ name | camel }}"
            include_tables = ["users", "audit.events"]
            post_run = ["rustfmt", "$STRATAFILE"]
            output_dir = "src/generated"

            [schema_paths]
            "{{ schema }}/fields.rs" = "templates/schema.rs.j2"

            [table_paths]
            "{{ schema }}/{{ table | toLower }}.rs" = "templates/table.rs.j2"
            "{{ schema }}/{{ table | toLower }}_test.rs" = "templates/table_test.rs.j2"

            [type_map]
            "INTEGER" = "i64"
            "TEXT" = "String"
            "REAL" = "f64"

            [nullable_type_map]
            "INTEGER" = "Option<i64>"

            [params]
            crate_name = "app"
            "#,
        )
        .unwrap();

        let table_paths: Vec<_> = manifest.table_paths.keys().collect();
        assert_eq!(
            table_paths,
            vec![
                "{{ schema }}/{{ table | toLower }}.rs",
                "{{ schema }}/{{ table | toLower }}_test.rs"
            ]
        );
        let types: Vec<_> = manifest.type_map.keys().collect();
        assert_eq!(types, vec!["INTEGER", "TEXT", "REAL"]);
        assert_eq!(manifest.nullable_type_map["INTEGER"], "Option<i64>");
        assert_eq!(manifest.post_run().unwrap().program, "rustfmt");
        assert_eq!(
            manifest.params.get("crate_name").and_then(|v| v.as_str()),
            Some("app")
        );
        assert!(manifest.table_filter().allows("audit", "events"));
        assert!(!manifest.table_filter().allows("main", "events"));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Manifest::from_str(
            r#"
            conn_str = "app.db"
            db_type = "sqlite"
            schemas = ["main"]
            TypeMap = {}
            "#,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_required_key_is_parse_error() {
        let err = Manifest::from_str("db_type = \"sqlite\"\nschemas = [\"main\"]\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
