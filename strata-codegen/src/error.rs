use std::{io, path::PathBuf};

use miette::Diagnostic;
use strata_driver::DriverError;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type for generation and preview runs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Driver(#[from] DriverError),

    #[error(
        "no {} entry for type '{raw_type}' (column '{column}' of table '{schema}.{table}')",
        map_name(.nullable)
    )]
    #[diagnostic(
        code(strata::missing_type_mapping),
        help("map \"{raw_type}\" in strata.toml; `strata preview -f types` lists every type in use")
    )]
    MissingTypeMapping {
        raw_type: String,
        nullable: bool,
        schema: String,
        table: String,
        column: String,
    },

    #[error("failed to load template '{template}'")]
    #[diagnostic(code(strata::template_load))]
    TemplateLoad {
        template: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to render template '{template}' for {entity}")]
    #[diagnostic(code(strata::template))]
    Template {
        template: String,
        entity: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to render output path '{template}' for {entity}")]
    #[diagnostic(code(strata::path_render))]
    PathRender {
        template: String,
        entity: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(strata::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("post-run command `{command}` failed for '{}': {reason}", path.display())]
    #[diagnostic(code(strata::post_run))]
    PostRun {
        command: String,
        path: PathBuf,
        reason: String,
    },

    #[error("failed to write output")]
    #[diagnostic(code(strata::output))]
    Output(#[from] io::Error),

    #[error("failed to serialize preview as {format}")]
    #[diagnostic(code(strata::serialize))]
    Serialize {
        format: &'static str,
        #[source]
        source: BoxError,
    },
}

fn map_name(nullable: &bool) -> &'static str {
    if *nullable {
        "nullable_type_map"
    } else {
        "type_map"
    }
}
