//! Type resolution, templating and the generation pipeline for strata.
//!
//! Given a [`Project`] and a [`strata_driver::Driver`], [`generate`] reads the
//! schema model, resolves every column type through the manifest's type
//! maps, renders the configured templates and writes the results.
//! [`preview`] stops after resolution and prints what templates would see.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phases, plugins and the [`GenerationContext`]
//! - [`scaffold`] - Starter files written by `strata init`

mod error;
mod hooks;
pub mod pipeline;
mod preview;
mod project;
mod resolve;
mod run;
pub mod scaffold;
mod template;
mod view;

pub use error::{Error, Result};
pub use hooks::{HookOutcome, run_post_run};
pub use pipeline::{Diagnostic, GenerationContext, Severity};
pub use preview::{PreviewFormat, UnknownFormat, format_tabular, format_types, format_views};
pub use project::Project;
pub use resolve::TypeResolver;
pub use run::{GenerateReport, generate, preview};
pub use template::{Helper, HelperSet, TemplateEnv};
pub use view::{ColumnView, SchemaView, TableView, ViewBuilder};
