//! Schema skeleton generation from an existing environment.
//!
//! Every key becomes an optional rule with a guessed type and the observed
//! value as its default. The output is meant to be edited by hand.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{EnvLintError, Result};

use super::guess::guess_type;
use super::rule::{Schema, SchemaRule};
use super::value::SchemaValue;

/// Serialization format for schema files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for SchemaFormat {
    type Err = EnvLintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(EnvLintError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Build a schema skeleton from an environment map.
pub fn generate_schema(env: &HashMap<String, String>) -> Schema {
    env.iter()
        .map(|(key, value)| {
            let rule = SchemaRule {
                default: Some(SchemaValue::String(value.clone())),
                ..SchemaRule::new(guess_type(value))
            };
            (key.clone(), rule)
        })
        .collect()
}

/// Serialize a schema as JSON or YAML text.
pub fn render_schema(schema: &Schema, format: SchemaFormat) -> Result<String> {
    match format {
        SchemaFormat::Json => {
            serde_json::to_string_pretty(schema).map_err(|e| EnvLintError::Serialize {
                what: "schema as JSON".to_string(),
                message: e.to_string(),
            })
        }
        SchemaFormat::Yaml => serde_yaml::to_string(schema).map_err(|e| EnvLintError::Serialize {
            what: "schema as YAML".to_string(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RuleType;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn format_from_str() {
        assert_eq!("json".parse::<SchemaFormat>().unwrap(), SchemaFormat::Json);
        assert_eq!("YAML".parse::<SchemaFormat>().unwrap(), SchemaFormat::Yaml);
        assert_eq!("yml".parse::<SchemaFormat>().unwrap(), SchemaFormat::Yaml);
        assert!(matches!(
            "toml".parse::<SchemaFormat>(),
            Err(EnvLintError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn generates_one_optional_rule_per_key() {
        let schema = generate_schema(&env(&[
            ("PORT", "3000"),
            ("DEBUG", "true"),
            ("HOST", "localhost"),
        ]));

        assert_eq!(schema.len(), 3);
        assert_eq!(schema["PORT"].rule_type, RuleType::Number);
        assert_eq!(schema["DEBUG"].rule_type, RuleType::Boolean);
        assert_eq!(schema["HOST"].rule_type, RuleType::String);
        assert!(schema.values().all(|r| !r.required));
    }

    #[test]
    fn default_is_the_raw_string() {
        let schema = generate_schema(&env(&[("PORT", "3000")]));
        assert_eq!(schema["PORT"].default, Some(SchemaValue::from("3000")));
    }

    #[test]
    fn renders_json() {
        let schema = generate_schema(&env(&[("PORT", "3000")]));
        let out = render_schema(&schema, SchemaFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(
            parsed,
            serde_json::json!({ "PORT": { "type": "number", "default": "3000" } })
        );
    }

    #[test]
    fn rendered_yaml_parses_back() {
        let schema = generate_schema(&env(&[("DEBUG", "true"), ("NAME", "app")]));
        let out = render_schema(&schema, SchemaFormat::Yaml).unwrap();
        let parsed: Schema = serde_yaml::from_str(&out).unwrap();

        assert_eq!(parsed, schema);
    }

    #[test]
    fn empty_env_renders_empty_object() {
        let out = render_schema(&Schema::new(), SchemaFormat::Json).unwrap();
        assert_eq!(out, "{}");
    }
}
