// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Database introspection for the strata code generator.
//!
//! A [`Driver`] turns a connection string and a list of schema names into
//! the [`strata_schema`] model. Drivers are looked up by identifier in a
//! [`DriverRegistry`], so the generation pipeline never names a concrete
//! database engine.

mod driver;
mod registry;
pub mod sqlite;

pub use driver::{Driver, DriverError};
pub use registry::DriverRegistry;
pub use sqlite::SqliteDriver;
