// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `strata.toml`.
//!
//! The manifest carries everything a run needs besides the templates
//! themselves: connection parameters, the schema filter, type maps, and the
//! path-template bindings.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    DEFAULT_NAME_CONVERSION, FILE_TOKEN, Manifest, ParseContext, PostRun, StrataToml, TableFilter,
};
