//! Preview operation - resolved schema without writing files.

use std::sync::Arc;

use strata_codegen::{PreviewFormat, Project, Result};
use strata_driver::Driver;

use crate::reports::PreviewReport;

/// Execute the preview operation.
pub fn preview(
    project: Project,
    driver: Arc<dyn Driver>,
    format: PreviewFormat,
) -> Result<PreviewReport> {
    let mut text = Vec::new();
    let diagnostics = strata_codegen::preview(project, driver, format, &mut text)?;

    Ok(PreviewReport {
        text: String::from_utf8_lossy(&text).into_owned(),
        warnings: diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .map(|d| super::describe(d))
            .collect(),
    })
}
