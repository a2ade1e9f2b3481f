//! Init operation - write the starter config and templates.

use std::{io, path::Path};

use strata_codegen::scaffold::init_files;
use strata_core::WriteResult;

use crate::reports::InitReport;

/// Execute the init operation.
///
/// Files that already exist are left untouched and reported as kept.
pub fn init(dir: &Path) -> io::Result<InitReport> {
    let mut report = InitReport {
        dir: dir.to_path_buf(),
        created: Vec::new(),
        kept: Vec::new(),
    };

    for file in init_files() {
        let path = file.path(dir);
        let relative = path
            .strip_prefix(dir)
            .unwrap_or(&path)
            .display()
            .to_string();
        match file.write(dir)? {
            WriteResult::Written => report.created.push(relative),
            WriteResult::Skipped => report.kept.push(relative),
        }
    }

    Ok(report)
}
