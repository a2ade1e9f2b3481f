//! Introspect phase - reads the schema model and applies the table filter.

use crate::{
    Result,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Phase that asks the driver for the configured schemas.
///
/// Tables rejected by `include_tables`/`exclude_tables` are dropped here, so
/// every later phase only sees tables that take part in the run.
pub struct IntrospectPhase;

impl Phase for IntrospectPhase {
    fn name(&self) -> &'static str {
        "introspect"
    }

    fn description(&self) -> &'static str {
        "Read schemas, tables and columns from the database"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let manifest = ctx.project.manifest();
        let mut schemas = ctx
            .driver
            .introspect(&manifest.conn_str, &manifest.schemas)?;

        let filter = manifest.table_filter();
        let all_tables: Vec<(&str, &str)> = schemas
            .iter()
            .flat_map(|s| s.tables.iter().map(|t| (s.name.as_str(), t.name.as_str())))
            .collect();
        let unmatched: Vec<String> = filter
            .unmatched(&all_tables)
            .into_iter()
            .map(String::from)
            .collect();

        for schema in &mut schemas {
            schema
                .tables
                .retain(|table| filter.allows(&schema.name, &table.name));
            log::debug!(
                "introspect: schema '{}' has {} tables",
                schema.name,
                schema.tables.len()
            );
        }

        for entry in unmatched {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), "table filter entry matches no table").at(entry),
            );
        }
        for schema in &schemas {
            if schema.tables.is_empty() {
                ctx.add_info(
                    self.name(),
                    format!("schema '{}' has no tables to generate", schema.name),
                );
            }
        }

        ctx.schemas = Some(schemas);
        Ok(())
    }
}
