//! Leaf and composite condition nodes.

use std::fmt;

use crate::{Placeholders, Value};

/// Comparison operator of a [`Compare`] leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::NotEqual => "<>",
            Comparison::Greater => ">",
            Comparison::GreaterOrEqual => ">=",
            Comparison::Less => "<",
            Comparison::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node in a condition tree.
///
/// `render` must take exactly one placeholder per value that `values`
/// returns, in the same order.
pub trait WhereClause: fmt::Debug {
    /// Render the condition, drawing placeholder numbers from `placeholders`.
    fn render(&self, placeholders: &mut Placeholders) -> String;

    /// Values to bind, in placeholder order.
    fn values(&self) -> Vec<Value>;

    /// Whether this node joins other nodes and must be parenthesized when
    /// nested.
    fn is_composite(&self) -> bool {
        false
    }
}

impl<T: WhereClause + ?Sized> WhereClause for Box<T> {
    fn render(&self, placeholders: &mut Placeholders) -> String {
        (**self).render(placeholders)
    }

    fn values(&self) -> Vec<Value> {
        (**self).values()
    }

    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}

/// Render a condition tree from `$1`.
pub fn render_where(clause: &dyn WhereClause) -> (String, Vec<Value>) {
    let mut placeholders = Placeholders::new();
    let sql = clause.render(&mut placeholders);
    (sql, clause.values())
}

/// `column <op> $N`
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    pub column: String,
    pub op: Comparison,
    pub value: Value,
}

impl Compare {
    pub fn new(column: impl Into<String>, op: Comparison, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }
}

impl WhereClause for Compare {
    fn render(&self, placeholders: &mut Placeholders) -> String {
        format!("{} {} {}", self.column, self.op, placeholders.take())
    }

    fn values(&self) -> Vec<Value> {
        vec![self.value.clone()]
    }
}

/// `column IN ($N, $N+1, ...)`
///
/// With no values this renders `1 = 0`, which matches nothing and takes no
/// placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct In {
    pub column: String,
    pub values: Vec<Value>,
}

impl In {
    pub fn new<V: Into<Value>>(column: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl WhereClause for In {
    fn render(&self, placeholders: &mut Placeholders) -> String {
        if self.values.is_empty() {
            return "1 = 0".to_string();
        }
        let list: Vec<String> = self.values.iter().map(|_| placeholders.take()).collect();
        format!("{} IN ({})", self.column, list.join(", "))
    }

    fn values(&self) -> Vec<Value> {
        self.values.clone()
    }
}

macro_rules! composite {
    ($(#[$meta:meta])* $name:ident, $joiner:literal, $empty:literal) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            clauses: Vec<Box<dyn WhereClause>>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Append a child clause.
            pub fn push(&mut self, clause: impl WhereClause + 'static) {
                self.clauses.push(Box::new(clause));
            }

            pub fn with(mut self, clause: impl WhereClause + 'static) -> Self {
                self.push(clause);
                self
            }

            pub fn len(&self) -> usize {
                self.clauses.len()
            }

            pub fn is_empty(&self) -> bool {
                self.clauses.is_empty()
            }
        }

        impl WhereClause for $name {
            fn render(&self, placeholders: &mut Placeholders) -> String {
                if self.clauses.is_empty() {
                    return $empty.to_string();
                }
                let parts: Vec<String> = self
                    .clauses
                    .iter()
                    .map(|clause| {
                        let sql = clause.render(placeholders);
                        if clause.is_composite() {
                            format!("({})", sql)
                        } else {
                            sql
                        }
                    })
                    .collect();
                parts.join($joiner)
            }

            fn values(&self) -> Vec<Value> {
                self.clauses.iter().flat_map(|c| c.values()).collect()
            }

            fn is_composite(&self) -> bool {
                true
            }
        }
    };
}

composite!(
    /// Children joined with `AND`. Empty renders `1 = 1`.
    And,
    " AND ",
    "1 = 1"
);

composite!(
    /// Children joined with `OR`. Empty renders `1 = 0`.
    Or,
    " OR ",
    "1 = 0"
);
