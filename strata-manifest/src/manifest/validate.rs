//! Validation context and rules applied after parsing.

use std::sync::Arc;

use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Serde already enforces types and required keys; this covers the rules
/// that only make sense on the parsed manifest, pointing back into the
/// source where a key can be found.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "strata.toml");
/// ctx.validate(&manifest)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Source context for error reporting
    source: Arc<SourceContext>,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Find the span of a top-level `key = ...` assignment.
    pub fn find_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    fn error_at(&self, key: &str, message: impl Into<String>) -> Box<crate::Error> {
        self.source
            .validation_error_at(message, self.find_span(key))
    }

    /// Run every manifest rule, stopping at the first violation.
    pub fn validate(&self, manifest: &Manifest) -> Result<()> {
        if manifest.conn_str.trim().is_empty() {
            return Err(self.error_at("conn_str", "conn_str must not be empty"));
        }

        if manifest.db_type.trim().is_empty() {
            return Err(self.error_at("db_type", "db_type must not be empty"));
        }

        if manifest.schemas.is_empty() {
            return Err(self.error_at("schemas", "at least one schema must be listed"));
        }

        if let Some(schema) = manifest.schemas.iter().find(|s| s.trim().is_empty()) {
            return Err(self.error_at(
                "schemas",
                format!("schema names must not be empty (got {:?})", schema),
            ));
        }

        if let Some(schema) = manifest
            .schemas
            .iter()
            .enumerate()
            .find_map(|(i, s)| manifest.schemas[..i].contains(s).then_some(s))
        {
            return Err(self.error_at(
                "schemas",
                format!("schema '{}' is listed more than once", schema),
            ));
        }

        if manifest.name_conversion.trim().is_empty() {
            return Err(self.error_at("name_conversion", "name_conversion must not be empty"));
        }

        if !manifest.include_tables.is_empty() && !manifest.exclude_tables.is_empty() {
            return Err(self.error_at(
                "exclude_tables",
                "include_tables and exclude_tables cannot both be set",
            ));
        }

        for (key, entries) in [
            ("include_tables", &manifest.include_tables),
            ("exclude_tables", &manifest.exclude_tables),
        ] {
            if let Some(entry) = entries
                .iter()
                .find(|e| e.is_empty() || e.matches('.').count() > 1)
            {
                return Err(self.error_at(
                    key,
                    format!("'{}' is not a table or schema.table name", entry),
                ));
            }
        }

        if let Some(program) = manifest.post_run.first()
            && program.trim().is_empty()
        {
            return Err(self.error_at("post_run", "post_run must start with a program name"));
        }

        Ok(())
    }
}

/// Find the span of a top-level key assignment such as `schemas = [...]`.
///
/// Only the key itself is highlighted. Returns `None` when the key is not
/// written out (e.g. it was defaulted).
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}
