//! Shared string helpers for identifier generation.

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.to_upper_camel_case()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    s.to_kebab_case()
}

/// Upper-case the first letter of every word, leaving everything else as is.
///
/// Letters, digits and underscores form words; anything else separates them,
/// so `"sql.nullString"` becomes `"Sql.NullString"` and `"user_id"` stays
/// one word (`"User_id"`).
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !in_word {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        in_word = is_word;
    }
    result
}

/// Replace the first `n` occurrences of `from` with `to`.
///
/// A negative `n` replaces every occurrence.
pub fn replace_n(s: &str, from: &str, to: &str, n: i64) -> String {
    match usize::try_from(n) {
        Ok(count) => s.replacen(from, to, count),
        Err(_) => s.replace(from, to),
    }
}
