//! The driver capability.

use miette::Diagnostic;
use strata_schema::Schema;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Introspects one kind of database.
///
/// Implementations must return schemas in the order they were requested and
/// tables/columns in a stable order, since generated output follows it.
pub trait Driver: Send + Sync {
    /// Identifier used in `db_type`.
    fn name(&self) -> &'static str;

    /// Read the named schemas.
    ///
    /// # Errors
    ///
    /// Returns an error when the database cannot be reached, a schema does
    /// not exist, or a metadata query fails.
    fn introspect(&self, conn_str: &str, schemas: &[String]) -> Result<Vec<Schema>, DriverError>;
}

#[derive(Debug, Error, Diagnostic)]
pub enum DriverError {
    #[error("failed to connect to '{conn_str}'")]
    #[diagnostic(code(strata::driver::connect), help("check conn_str in strata.toml"))]
    Connect {
        conn_str: String,
        #[source]
        source: BoxError,
    },

    #[error("schema '{schema}' does not exist")]
    #[diagnostic(
        code(strata::driver::unknown_schema),
        help("available schemas: {available}")
    )]
    UnknownSchema { schema: String, available: String },

    #[error("failed to read {what}")]
    #[diagnostic(code(strata::driver::query))]
    Query {
        what: String,
        #[source]
        source: BoxError,
    },

    #[error("{0}")]
    #[diagnostic(code(strata::driver::invalid_schema))]
    InvalidSchema(#[from] strata_schema::DuplicateTable),

    #[error("no driver registered for db_type '{db_type}'")]
    #[diagnostic(
        code(strata::driver::unsupported),
        help("supported db_type values: {available}")
    )]
    Unsupported { db_type: String, available: String },
}

impl DriverError {
    /// Wrap a metadata query failure.
    pub fn query(what: impl Into<String>, source: impl Into<BoxError>) -> Self {
        DriverError::Query {
            what: what.into(),
            source: source.into(),
        }
    }
}
