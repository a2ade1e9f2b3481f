//! Schema model for the strata code generator.
//!
//! This crate holds the language-neutral representation of introspected
//! database metadata. Drivers produce it, the code generation pipeline
//! consumes it.
//!
//! # Architecture
//!
//! ```text
//! database → strata-driver (introspection) → strata-schema (model) → strata-codegen
//! ```
//!
//! The model is plain data:
//! - No target-language concerns (resolved output types live in the
//!   codegen crate's view, not here)
//! - Ordered exactly as the driver reported it, which is what makes
//!   generation deterministic

mod model;

pub use model::{Column, DuplicateTable, Schema, Table, db_types};
