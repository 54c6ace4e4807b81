//! Loosely-typed schema values.
//!
//! Schema files are JSON or YAML, so `default` and `allowed` entries may be
//! strings, numbers or booleans. [`SchemaValue`] keeps the original type and
//! defines one canonical string form used for comparison against raw `.env`
//! values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive value from a schema file.
///
/// Comparison with environment values always goes through the
/// [`Display`](fmt::Display) form, so `3000` and `"3000"` are equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaValue {
    /// `true` / `false`
    Bool(bool),
    /// Whole number
    Integer(i64),
    /// Fractional or out-of-range number
    Float(f64),
    /// Any string
    String(String),
}

impl SchemaValue {
    /// Check whether a raw environment value matches this value.
    pub fn matches(&self, raw: &str) -> bool {
        self.to_string() == raw
    }
}

impl fmt::Display for SchemaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(n) => f.write_str(&format_float(*n)),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SchemaValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for SchemaValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for SchemaValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SchemaValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for SchemaValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Shortest decimal form, switching to `1e+21` / `1.5e-07` notation when
/// the exponent is below -4 or at least 21.
fn format_float(n: f64) -> String {
    let sci = format!("{:e}", n);
    let exponent = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match exponent {
        Some((mantissa, exp)) if n != 0.0 && !(-4..21).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => n.to_string(),
    }
}

/// Render a list of values the way validation messages show them: `[a b c]`.
pub fn format_value_list(values: &[SchemaValue]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_float_displays_without_fraction() {
        assert_eq!(SchemaValue::Float(3000.0).to_string(), "3000");
        assert_eq!(SchemaValue::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn extreme_floats_use_exponent_notation() {
        assert_eq!(SchemaValue::Float(1e21).to_string(), "1e+21");
        assert_eq!(SchemaValue::Float(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(SchemaValue::Float(-2.5e100).to_string(), "-2.5e+100");
        assert_eq!(SchemaValue::Float(1e20).to_string(), "100000000000000000000");
        assert_eq!(SchemaValue::Float(0.0001).to_string(), "0.0001");
        assert_eq!(SchemaValue::Float(0.0).to_string(), "0");
    }

    #[test]
    fn large_float_in_allowed_list() {
        let values: Vec<SchemaValue> = serde_json::from_str("[1e21]").unwrap();
        assert!(values[0].matches("1e+21"));
        assert_eq!(format_value_list(&values), "[1e+21]");
    }

    #[test]
    fn number_and_string_compare_equal() {
        assert!(SchemaValue::Integer(3000).matches("3000"));
        assert!(SchemaValue::from("3000").matches("3000"));
        assert!(!SchemaValue::Integer(3000).matches("3000.0"));
    }

    #[test]
    fn bool_displays_lowercase() {
        assert!(SchemaValue::Bool(true).matches("true"));
        assert!(!SchemaValue::Bool(true).matches("TRUE"));
    }

    #[test]
    fn deserializes_mixed_json_list() {
        let values: Vec<SchemaValue> =
            serde_json::from_str(r#"[3001, 2.5, true, "prod"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                SchemaValue::Integer(3001),
                SchemaValue::Float(2.5),
                SchemaValue::Bool(true),
                SchemaValue::from("prod"),
            ]
        );
    }

    #[test]
    fn deserializes_yaml_scalars() {
        let values: Vec<SchemaValue> = serde_yaml::from_str("[8080, dev, false]").unwrap();
        assert_eq!(values[0], SchemaValue::Integer(8080));
        assert_eq!(values[1], SchemaValue::from("dev"));
        assert_eq!(values[2], SchemaValue::Bool(false));
    }

    #[test]
    fn value_list_is_space_separated_in_brackets() {
        let values = vec![SchemaValue::Integer(3001), SchemaValue::Integer(3002)];
        assert_eq!(format_value_list(&values), "[3001 3002]");
        assert_eq!(format_value_list(&[]), "[]");
    }
}
