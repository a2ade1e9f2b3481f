//! Generate operation - render every configured output.

use std::{path::Path, sync::Arc};

use strata_codegen::{Project, Result};
use strata_driver::Driver;

use crate::reports::{GenReport, HookRun};

/// Execute the generate operation.
///
/// Paths in the report are shown relative to the config file's directory
/// where possible.
pub fn generate(project: Project, driver: Arc<dyn Driver>) -> Result<GenReport> {
    let base_dir = project.base_dir().to_path_buf();
    let result = strata_codegen::generate(project, driver)?;

    let canonical_base = base_dir.canonicalize().unwrap_or_else(|_| base_dir.clone());
    let display = |path: &Path| {
        path.strip_prefix(&base_dir)
            .or_else(|_| path.strip_prefix(&canonical_base))
            .unwrap_or(path)
            .display()
            .to_string()
    };

    let (warnings, notes) = result
        .diagnostics
        .iter()
        .partition::<Vec<_>, _>(|d| d.severity.is_warning());

    Ok(GenReport {
        files: result.files.iter().map(|p| display(p)).collect(),
        hooks: result
            .hooks
            .iter()
            .map(|hook| HookRun {
                file: display(&hook.path),
                output: format!("{}{}", hook.stdout, hook.stderr).trim().to_string(),
            })
            .collect(),
        warnings: warnings.iter().map(|d| super::describe(d)).collect(),
        notes: notes.iter().map(|d| super::describe(d)).collect(),
    })
}
