//! Entry points for a full generation run and for previews.

use std::{io::Write, path::PathBuf, sync::Arc};

use strata_driver::Driver;
use strata_schema::db_types;

use crate::{
    Diagnostic, GenerationContext, HookOutcome, PreviewFormat, Project, Result, format_types,
    format_views, pipeline::Pipeline,
};

/// What a generation run did.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Files written, in first-write order.
    pub files: Vec<PathBuf>,
    /// Successful post-run invocations.
    pub hooks: Vec<HookOutcome>,
    /// Warnings and notes from every phase.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerateReport {
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

impl From<GenerationContext> for GenerateReport {
    fn from(ctx: GenerationContext) -> Self {
        Self {
            files: ctx.written,
            hooks: ctx.hooks,
            diagnostics: ctx.diagnostics,
        }
    }
}

/// Introspect, resolve, render and write every configured output, then run
/// the post-run command.
pub fn generate(project: Project, driver: Arc<dyn Driver>) -> Result<GenerateReport> {
    let ctx = GenerationContext::new(project, driver)?;
    let ctx = Pipeline::generate().run(ctx)?;
    Ok(ctx.into())
}

/// Write a preview of `project` to `out` in `format`.
///
/// Nothing is written to disk. Returns the diagnostics collected while
/// introspecting.
pub fn preview(
    project: Project,
    driver: Arc<dyn Driver>,
    format: PreviewFormat,
    out: &mut dyn Write,
) -> Result<Vec<Diagnostic>> {
    let ctx = GenerationContext::new(project, driver)?;
    let (text, ctx) = if format.needs_resolution() {
        let ctx = Pipeline::preview().run(ctx)?;
        (format_views(format, ctx.views())?, ctx)
    } else {
        let ctx = Pipeline::introspect().run(ctx)?;
        (format_types(db_types(ctx.schemas())), ctx)
    };
    out.write_all(text.as_bytes())?;
    Ok(ctx.diagnostics)
}
