//! Gen command report data structures.

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug, Default)]
pub struct GenReport {
    /// Written files, in write order.
    pub files: Vec<String>,
    /// Successful post-run invocations.
    pub hooks: Vec<HookRun>,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Informational messages from the pipeline.
    pub notes: Vec<String>,
}

/// One successful post-run invocation.
#[derive(Debug)]
pub struct HookRun {
    pub file: String,
    /// Combined stdout and stderr, trimmed.
    pub output: String,
}

impl Report for GenReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        for note in &self.notes {
            out.preformatted(&format!("note: {}", note));
        }

        if self.files.is_empty() {
            out.preformatted("No files generated.");
            return;
        }

        out.section(&format!("Generated ({})", self.files.len()));
        for file in &self.files {
            out.added_item(file);
        }

        if !self.hooks.is_empty() {
            out.newline();
            out.key_value("Post-run", &format!("ran on {} files", self.hooks.len()));
            for hook in self.hooks.iter().filter(|h| !h.output.is_empty()) {
                out.list_item(&hook.file);
                out.preformatted(&hook.output);
            }
        }
    }
}
