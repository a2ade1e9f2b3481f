//! Core operations.
//!
//! This module contains the business logic for strata commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod init;
pub mod preview;

pub use generate::generate;
pub use init::init;
pub use preview::preview;

use strata_codegen::Diagnostic;

/// A diagnostic's message with its location, without the severity prefix.
fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(location) => format!("{} ({})", diagnostic.message, location),
        None => diagnostic.message.clone(),
    }
}
