//! Composable WHERE clauses with positional placeholders.
//!
//! Query code generated by strata builds conditions out of typed
//! [`Field`]s and renders them to `$N`-style SQL plus the values to bind:
//!
//! ```
//! use strata_query::{And, Field, render_where};
//!
//! const ID: Field<i64> = Field::new("id");
//! const EMAIL: Field<String> = Field::new("email");
//!
//! let clause = And::new()
//!     .with(ID.equals(5))
//!     .with(EMAIL.is_in(["a".to_string(), "b".to_string()]));
//!
//! let (sql, values) = render_where(&clause);
//! assert_eq!(sql, "id = $1 AND email IN ($2, $3)");
//! assert_eq!(values.len(), 3);
//! ```
//!
//! Every clause in a tree renders against one shared [`Placeholders`]
//! counter, so the `N`th placeholder always lines up with the `N`th value.

mod clause;
mod field;
mod placeholders;
mod value;

pub use clause::{And, Compare, Comparison, In, Or, WhereClause, render_where};
pub use field::Field;
pub use placeholders::Placeholders;
pub use value::Value;
