//! Placeholder numbering must line up with the bound value list for any tree.

use proptest::prelude::*;
use strata_query::{
    And, Compare, Comparison, Field, In, Or, Placeholders, Value, WhereClause, render_where,
};

/// Shape of a condition tree, built into real clauses by [`build`].
#[derive(Debug, Clone)]
enum Shape {
    Compare(Comparison),
    In(usize),
    And(Vec<Shape>),
    Or(Vec<Shape>),
}

fn comparison() -> impl Strategy<Value = Comparison> {
    prop_oneof![
        Just(Comparison::Equal),
        Just(Comparison::NotEqual),
        Just(Comparison::Greater),
        Just(Comparison::GreaterOrEqual),
        Just(Comparison::Less),
        Just(Comparison::LessOrEqual),
    ]
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        comparison().prop_map(Shape::Compare),
        (0usize..4).prop_map(Shape::In),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Shape::And),
            prop::collection::vec(inner, 0..5).prop_map(Shape::Or),
        ]
    })
}

/// Build the clause for `shape`, giving each operand the number of the
/// placeholder it is expected to bind to.
fn build(shape: &Shape, next: &mut i64) -> Box<dyn WhereClause> {
    match shape {
        Shape::Compare(op) => Box::new(Compare::new("c", *op, take(next))),
        Shape::In(n) => Box::new(In::new("c", (0..*n).map(|_| take(next)).collect::<Vec<_>>())),
        Shape::And(children) => {
            let mut and = And::new();
            for child in children {
                and.push(build(child, next));
            }
            Box::new(and)
        }
        Shape::Or(children) => {
            let mut or = Or::new();
            for child in children {
                or.push(build(child, next));
            }
            Box::new(or)
        }
    }
}

fn take(next: &mut i64) -> i64 {
    *next += 1;
    *next
}

fn placeholder_numbers(sql: &str) -> Vec<i64> {
    sql.split('$')
        .skip(1)
        .map(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap()
        })
        .collect()
}

proptest! {
    #[test]
    fn placeholders_align_with_values(shape in shape()) {
        let mut next = 0;
        let clause = build(&shape, &mut next);

        let (sql, values) = render_where(clause.as_ref());

        let expected: Vec<Value> = (1..=next).map(Value::Int).collect();
        prop_assert_eq!(&values, &expected);
        prop_assert_eq!(placeholder_numbers(&sql), (1..=next).collect::<Vec<_>>());
    }

    #[test]
    fn counter_ends_one_past_last_value(shape in shape(), start in 1usize..50) {
        let mut next = 0;
        let clause = build(&shape, &mut next);

        let mut placeholders = Placeholders::starting_at(start);
        clause.render(&mut placeholders);
        prop_assert_eq!(placeholders.peek(), start + clause.values().len());
    }
}

#[test]
fn and_of_equal_and_in() {
    const ID: Field<i64> = Field::new("id");
    const EMAIL: Field<&str> = Field::new("email");

    let clause = And::new().with(ID.equals(5)).with(EMAIL.is_in(["a", "b"]));
    let (sql, values) = render_where(&clause);

    assert_eq!(sql, "id = $1 AND email IN ($2, $3)");
    assert_eq!(
        values,
        vec![
            Value::Int(5),
            Value::Text("a".into()),
            Value::Text("b".into()),
        ]
    );
}
