//! Schema rule definitions.
//!
//! These structs map directly to one entry of a JSON or YAML schema file:
//!
//! ```yaml
//! PORT:
//!   type: number
//!   required: true
//!   min: 1024
//!   max: 65535
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::value::SchemaValue;

/// A full schema: variable name to rule.
///
/// Keys are kept sorted so that evaluation and output order are stable.
pub type Schema = BTreeMap<String, SchemaRule>;

/// Declared type of an environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleType {
    /// Free text, optionally constrained by pattern and length.
    String,
    /// Anything that parses as a 64-bit float.
    Number,
    /// `true` or `false`, case-insensitive.
    Boolean,
    /// Any other type name. Checks are skipped with a warning.
    Unknown(String),
}

impl Default for RuleType {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl RuleType {
    /// Name as written in schema files.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Unknown(name) => name,
        }
    }
}

impl From<String> for RuleType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            _ => Self::Unknown(name),
        }
    }
}

impl From<RuleType> for String {
    fn from(rule_type: RuleType) -> Self {
        rule_type.as_str().to_string()
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints for a single environment variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaRule {
    /// Declared type
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub rule_type: RuleType,

    /// Fail when the key is absent, even if a default exists
    #[serde(skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub required: bool,

    /// Value written into the environment when the key is absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<SchemaValue>,

    /// Permitted values, compared by string form
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub allowed: Vec<SchemaValue>,

    /// Regular expression the value must contain a match for (string only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Exact byte length (string only). Length bounds are signed so that
    /// negative values still load and compare numerically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,

    /// Maximum byte length (string only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    /// Minimum byte length (string only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    /// Inclusive lower bound (number only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Inclusive upper bound (number only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Replaces every generated error message for this key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_error: Option<String>,
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// Treat an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SchemaRule {
    /// Create an optional rule of the given type with no constraints.
    pub fn new(rule_type: RuleType) -> Self {
        Self {
            rule_type,
            ..Default::default()
        }
    }

    /// Mark the key as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<SchemaValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the allowed values.
    pub fn with_allowed<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SchemaValue>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the regex pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the exact length.
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the maximum length.
    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the minimum length.
    pub fn with_min_length(mut self, min_length: i64) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Set the lower numeric bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper numeric bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the custom error message.
    pub fn with_custom_error(mut self, message: impl Into<String>) -> Self {
        self.custom_error = Some(message.into());
        self
    }

    /// The custom error message, if set and non-empty.
    pub fn custom_error(&self) -> Option<&str> {
        self.custom_error.as_deref().filter(|m| !m.is_empty())
    }

    /// The regex pattern, if set and non-empty.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|p| !p.is_empty())
    }
}
