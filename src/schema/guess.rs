//! Type inference for raw `.env` values.

use super::rule::RuleType;

/// Guess the schema type of a raw value.
///
/// `true`/`false` in any case is a boolean, anything that parses as an
/// integer or a float is a number, everything else is a string.
///
/// # Example
///
/// ```
/// use env_lint::schema::{guess_type, RuleType};
///
/// assert_eq!(guess_type("TRUE"), RuleType::Boolean);
/// assert_eq!(guess_type("3000"), RuleType::Number);
/// assert_eq!(guess_type("0.75"), RuleType::Number);
/// assert_eq!(guess_type("localhost"), RuleType::String);
/// ```
pub fn guess_type(value: &str) -> RuleType {
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return RuleType::Boolean;
    }
    if value.parse::<i64>().is_ok() || value.parse::<f64>().is_ok() {
        return RuleType::Number;
    }
    RuleType::String
}
