use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to set up (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::init(&self.dir)
            .wrap_err_with(|| format!("Failed to initialize {}", self.dir.display()))?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
