mod completions;
mod generate;
mod init;
mod preview;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenCommand;
use init::InitCommand;
use preview::PreviewCommand;

/// Exit code for bad flags and configuration problems (clap uses it too).
const EXIT_CONFIG: i32 = 2;
/// Exit code for failures while generating.
const EXIT_RUNTIME: i32 = 1;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

fn exit_with(report: miette::Report, code: i32) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(code);
}

impl<T> UnwrapOrExit<T> for strata_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(*e), EXIT_CONFIG))
    }
}

/// Only registry lookups reach this impl; an unknown `db_type` is a
/// configuration error.
impl<T> UnwrapOrExit<T> for std::result::Result<T, strata_driver::DriverError> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| exit_with(miette::Report::new(e), EXIT_CONFIG))
    }
}

impl<T> UnwrapOrExit<T> for strata_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| {
            let code = exit_code(&e);
            exit_with(miette::Report::new(e), code)
        })
    }
}

/// Templates that fail to load or parse are named by strata.toml.
fn exit_code(err: &strata_codegen::Error) -> i32 {
    match err {
        strata_codegen::Error::TemplateLoad { .. } => EXIT_CONFIG,
        _ => EXIT_RUNTIME,
    }
}

#[derive(Parser)]
#[command(name = "strata")]
#[command(version)]
#[command(about = "Generate code from a database schema through your own templates")]
pub(crate) struct Cli {
    /// Log pipeline progress (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        init_logging(self.verbose);

        match &self.command {
            Commands::Gen(cmd) => cmd.run(),
            Commands::Preview(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[derive(Subcommand)]
enum Commands {
    /// Generate files from strata.toml
    Gen(GenCommand),

    /// Show what templates would see, without writing files
    Preview(PreviewCommand),

    /// Write a starter strata.toml and templates
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unknown_preview_format_is_usage_error() {
        let err = Cli::try_parse_from(["strata", "preview", "-f", "xml"])
            .err()
            .unwrap();

        assert_eq!(err.exit_code(), EXIT_CONFIG);
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_template_load_is_config_error() {
        let load = strata_codegen::Error::TemplateLoad {
            template: "templates/table.j2".to_string(),
            source: "template not found".into(),
        };
        let write = strata_codegen::Error::Output(std::io::Error::other("disk full"));

        assert_eq!(exit_code(&load), EXIT_CONFIG);
        assert_eq!(exit_code(&write), EXIT_RUNTIME);
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["strata", "gen", "-v", "-c", "db/strata.toml"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Gen(_)));
    }
}
