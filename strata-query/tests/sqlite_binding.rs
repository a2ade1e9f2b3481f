#![cfg(feature = "rusqlite")]

use rusqlite::{Connection, params_from_iter};
use strata_query::{And, Field, Or, render_where};

const ID: Field<i64> = Field::new("id");
const EMAIL: Field<Option<String>> = Field::new("email");

fn users() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, email TEXT);
         INSERT INTO users VALUES (1, 'a'), (2, 'b'), (3, NULL), (4, 'd');",
    )
    .unwrap();
    conn
}

#[test]
fn test_rendered_clause_binds_in_order() {
    let conn = users();
    let clause = Or::new().with(ID.greater_than(3)).with(
        And::new()
            .with(ID.less_or_equal(2))
            .with(EMAIL.is_in([Some("b".to_string()), Some("z".to_string())])),
    );

    let (sql, values) = render_where(&clause);
    let mut stmt = conn
        .prepare(&format!("SELECT id FROM users WHERE {sql} ORDER BY id"))
        .unwrap();
    let ids: Vec<i64> = stmt
        .query_map(params_from_iter(values.iter()), |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn test_empty_or_matches_nothing() {
    let conn = users();
    let (sql, values) = render_where(&Or::new());
    let count: i64 = conn
        .query_row(
            &format!("SELECT count(*) FROM users WHERE {sql}"),
            params_from_iter(values.iter()),
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 0);
}
