//! Preview command report data structures.

use super::output::{Output, Report};

/// Report data from a preview.
#[derive(Debug)]
pub struct PreviewReport {
    /// The formatted preview, printed as is.
    pub text: String,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        out.raw(&self.text);
    }
}
