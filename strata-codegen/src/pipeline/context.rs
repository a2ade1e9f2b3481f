//! State passed through pipeline phases.

use std::{collections::BTreeSet, path::PathBuf, sync::Arc};

use strata_driver::Driver;
use strata_schema::Schema;

use super::diagnostic::{Diagnostic, Severity};
use crate::{
    HelperSet, HookOutcome, Project, Result, SchemaView, TemplateEnv, TypeResolver,
    view::NAME_TEMPLATE,
};

/// Context passed through all pipeline phases.
///
/// Each phase fills in its part: `introspect` sets `schemas`, `resolve` sets
/// `views` and `dereferenced_types`, `render` fills `written`, and
/// `post_run` fills `hooks`.
pub struct GenerationContext {
    /// The configuration being run.
    pub project: Project,
    /// Driver used by the introspect phase.
    pub driver: Arc<dyn Driver>,
    /// Templates and helpers; holds the name conversion from the start and
    /// gains content templates during rendering.
    pub env: TemplateEnv,
    pub resolver: TypeResolver,
    /// The schema model, after table filtering.
    pub schemas: Option<Vec<Schema>>,
    /// Resolved views of `schemas`.
    pub views: Option<Vec<SchemaView>>,
    /// Every raw type the resolver looked up.
    pub dereferenced_types: BTreeSet<String>,
    /// Files written, in first-write order without duplicates.
    pub written: Vec<PathBuf>,
    /// Successful post-run invocations.
    pub hooks: Vec<HookOutcome>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    /// Create a context with the standard helpers.
    ///
    /// # Errors
    ///
    /// Fails when the manifest's `name_conversion` is not a valid template.
    pub fn new(project: Project, driver: Arc<dyn Driver>) -> Result<Self> {
        Self::with_helpers(project, driver, &HelperSet::standard())
    }

    /// Create a context whose templates see only `helpers`.
    pub fn with_helpers(
        project: Project,
        driver: Arc<dyn Driver>,
        helpers: &HelperSet,
    ) -> Result<Self> {
        let manifest = project.manifest();
        let mut env = TemplateEnv::new(helpers);
        env.add_template(NAME_TEMPLATE, manifest.name_conversion.clone())?;
        let resolver = TypeResolver::new(
            manifest.type_map.clone(),
            manifest.nullable_type_map.clone(),
        );

        Ok(Self {
            project,
            driver,
            env,
            resolver,
            schemas: None,
            views: None,
            dereferenced_types: BTreeSet::new(),
            written: Vec::new(),
            hooks: Vec::new(),
            diagnostics: Vec::new(),
        })
    }

    /// The introspected schemas.
    ///
    /// # Panics
    ///
    /// Panics if the introspect phase hasn't run.
    pub fn schemas(&self) -> &[Schema] {
        self.schemas
            .as_deref()
            .expect("schemas not set - did the introspect phase run?")
    }

    /// The resolved views.
    ///
    /// # Panics
    ///
    /// Panics if the resolve phase hasn't run.
    pub fn views(&self) -> &[SchemaView] {
        self.views
            .as_deref()
            .expect("views not set - did the resolve phase run?")
    }

    /// Record a written file, keeping first-write order.
    pub fn record_written(&mut self, path: PathBuf) {
        if !self.written.contains(&path) {
            self.written.push(path);
        }
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

impl std::fmt::Debug for GenerationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationContext")
            .field("project", &self.project)
            .field("driver", &self.driver.name())
            .field("schemas", &self.schemas)
            .field("views", &self.views)
            .field("written", &self.written)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strata_driver::SqliteDriver;
    use strata_manifest::Manifest;

    use super::*;
    use crate::Error;

    fn project(extra: &str) -> Project {
        let manifest = Manifest::from_str(&format!(
            "conn_str = \"app.db\"\ndb_type = \"sqlite\"\nschemas = [\"main\"]\n{extra}"
        ))
        .unwrap();
        Project::new(manifest, ".")
    }

    #[test]
    fn test_context_creation() {
        let ctx = GenerationContext::new(project(""), Arc::new(SqliteDriver)).unwrap();

        assert!(ctx.schemas.is_none());
        assert!(ctx.views.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.env.has_template(NAME_TEMPLATE));
    }

    #[test]
    fn test_invalid_name_conversion() {
        let err = GenerationContext::new(
            project("name_conversion = \"{{ name | \""),
            Arc::new(SqliteDriver),
        )
        .unwrap_err();

        assert!(matches!(err, Error::TemplateLoad { template, .. } if template == NAME_TEMPLATE));
    }

    #[test]
    fn test_record_written_dedupes() {
        let mut ctx = GenerationContext::new(project(""), Arc::new(SqliteDriver)).unwrap();
        ctx.record_written(PathBuf::from("b.rs"));
        ctx.record_written(PathBuf::from("a.rs"));
        ctx.record_written(PathBuf::from("b.rs"));

        assert_eq!(ctx.written, vec![PathBuf::from("b.rs"), PathBuf::from("a.rs")]);
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = GenerationContext::new(project(""), Arc::new(SqliteDriver)).unwrap();

        ctx.add_info("introspect", "schema 'main' has no tables");
        assert!(!ctx.has_warnings());

        ctx.add_warning("post_run", "rustfmt failed");
        assert!(ctx.has_warnings());
        assert_eq!(ctx.warnings().count(), 1);
    }
}
