//! Core utilities and types for the strata code generator.
//!
//! This crate provides the file writing rules and string helpers shared
//! by the rest of the strata workspace.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{
    replace_n, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case, to_title_case,
};
