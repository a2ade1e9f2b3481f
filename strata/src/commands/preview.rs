use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use strata_codegen::PreviewFormat;
use strata_driver::DriverRegistry;
use strata_manifest::StrataToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PreviewCommand {
    /// Path to strata.toml (defaults to ./strata.toml)
    #[arg(short, long, default_value = "strata.toml")]
    pub config: PathBuf,

    /// Output format: tabular, yaml, json or types
    #[arg(short, long, default_value = "tabular")]
    pub format: PreviewFormat,
}

impl PreviewCommand {
    /// Run the preview command
    pub fn run(&self) -> Result<()> {
        let file = StrataToml::open(&self.config).unwrap_or_exit();
        let driver = DriverRegistry::with_defaults()
            .get(&file.manifest().db_type)
            .unwrap_or_exit();
        log::debug!(
            "{}: driver '{}'",
            file.path().display(),
            driver.name()
        );

        let report = ops::preview(file.into(), driver, self.format).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
