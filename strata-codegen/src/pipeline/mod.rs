//! Generation pipeline.
//!
//! A [`Pipeline`] runs phases over a shared [`GenerationContext`]:
//!
//! - `introspect` reads the schema model from the driver and applies the
//!   table filter
//! - `resolve` converts names and resolves column types into views
//! - `render` renders every path and content template and writes the files
//! - `post_run` runs the configured command once per written file
//!
//! Plugins get hooks before and after each phase, and every phase can add
//! [`Diagnostic`]s to the context.
//!
//! # Example
//!
//! ```ignore
//! use strata_codegen::pipeline::{GenerationContext, Pipeline};
//!
//! let ctx = GenerationContext::new(project, driver)?;
//! let ctx = Pipeline::generate().run(ctx)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
