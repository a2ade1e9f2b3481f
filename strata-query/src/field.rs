use std::marker::PhantomData;

use crate::{Compare, Comparison, In, Value};

/// A typed column handle.
///
/// Generated table modules declare one `const` per column so conditions only
/// accept values of the column's type.
#[derive(Debug)]
pub struct Field<T> {
    name: &'static str,
    _ty: PhantomData<fn() -> T>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> Field<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _ty: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: Into<Value>> Field<T> {
    fn compare(self, op: Comparison, value: T) -> Compare {
        Compare::new(self.name, op, value)
    }

    pub fn equals(self, value: T) -> Compare {
        self.compare(Comparison::Equal, value)
    }

    pub fn not_equal(self, value: T) -> Compare {
        self.compare(Comparison::NotEqual, value)
    }

    pub fn greater_than(self, value: T) -> Compare {
        self.compare(Comparison::Greater, value)
    }

    pub fn greater_or_equal(self, value: T) -> Compare {
        self.compare(Comparison::GreaterOrEqual, value)
    }

    pub fn less_than(self, value: T) -> Compare {
        self.compare(Comparison::Less, value)
    }

    pub fn less_or_equal(self, value: T) -> Compare {
        self.compare(Comparison::LessOrEqual, value)
    }

    pub fn is_in(self, values: impl IntoIterator<Item = T>) -> In {
        In::new(self.name, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_where;

    const SCORE: Field<f64> = Field::new("score");
    const NICK: Field<Option<String>> = Field::new("nick");

    #[test]
    fn test_less_than_uses_strict_operator() {
        let (sql, _) = render_where(&SCORE.less_than(1.0));
        assert_eq!(sql, "score < $1");
        let (sql, _) = render_where(&SCORE.less_or_equal(1.0));
        assert_eq!(sql, "score <= $1");
    }

    #[test]
    fn test_nullable_field_binds_null() {
        let (sql, values) = render_where(&NICK.not_equal(None));
        assert_eq!(sql, "nick <> $1");
        assert_eq!(values, vec![Value::Null]);
        assert_eq!(NICK.name(), "nick");
    }
}
