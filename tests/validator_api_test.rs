//! Integration tests for the validator public API.

use env_lint::config::{parse_schema, EnvFileParser};
use env_lint::schema::{RuleType, Schema, SchemaFormat, SchemaRule};
use env_lint::validator::{evaluate, EvaluateOptions};
use std::collections::HashMap;
use std::path::Path;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn single(key: &str, rule: SchemaRule) -> Schema {
    Schema::from([(key.to_string(), rule)])
}

#[test]
fn strict_mode_example() {
    let mut e = env(&[("PORT", "3000"), ("FOO", "1")]);
    let schema = single("PORT", SchemaRule::new(RuleType::Number).required());
    let options = EvaluateOptions {
        fail_fast: false,
        strict: true,
    };

    let result = evaluate(&mut e, &schema, options);

    assert!(!result.passed);
    assert_eq!(result.extra_keys, vec!["FOO".to_string()]);
    assert!(result.errors.is_empty());
}

#[test]
fn type_check_scenarios() {
    let cases: Vec<(&str, SchemaRule, Option<&str>)> = vec![
        (
            "abc",
            SchemaRule::new(RuleType::Number),
            Some("Expected number but got: abc"),
        ),
        ("TRUE", SchemaRule::new(RuleType::Boolean), None),
        (
            "08020718222",
            SchemaRule::new(RuleType::String).with_length(11),
            None,
        ),
        (
            "08020718222",
            SchemaRule::new(RuleType::String).with_length(12),
            Some("Expected string of length [12] but got: 08020718222"),
        ),
        (
            "10000",
            SchemaRule::new(RuleType::Number)
                .with_min(3000.0)
                .with_max(9999.0),
            Some("Expected number <= 9999.00 but got: 10000.00"),
        ),
        (
            "3000",
            SchemaRule::new(RuleType::Number).with_allowed([3001_i64, 3002]),
            Some("Value '3000' is not allowed. Expected one of: [3001 3002]"),
        ),
    ];

    for (value, rule, expected) in cases {
        let mut e = env(&[("KEY", value)]);
        let result = evaluate(&mut e, &single("KEY", rule), EvaluateOptions::default());
        assert_eq!(result.error("KEY"), expected, "value {:?}", value);
        assert_eq!(result.passed, expected.is_none());
    }
}

#[test]
fn fail_fast_returns_at_most_one_error() {
    let mut e = env(&[("A", "x"), ("B", "y"), ("C", "z"), ("EXTRA", "1")]);
    let rule = SchemaRule::new(RuleType::Number);
    let schema: Schema = ["A", "B", "C"]
        .into_iter()
        .map(|k| (k.to_string(), rule.clone()))
        .collect();
    let options = EvaluateOptions {
        fail_fast: true,
        strict: true,
    };

    let result = evaluate(&mut e, &schema, options);

    assert_eq!(result.error_count(), 1);
    assert!(result.extra_keys.is_empty());
    assert!(!result.passed);
}

#[test]
fn custom_error_wins_for_any_violation() {
    let rule = SchemaRule::new(RuleType::String)
        .with_pattern("^sk_")
        .with_min_length(10)
        .with_custom_error("X");

    for value in ["pk_live_1234567", "sk_1", "short"] {
        let mut e = env(&[("KEY", value)]);
        let result = evaluate(&mut e, &single("KEY", rule.clone()), EvaluateOptions::default());
        assert_eq!(result.error("KEY"), Some("X"), "value {:?}", value);
    }
}

#[test]
fn defaults_are_applied_to_the_caller_map() {
    let mut e = env(&[]);
    let schema = single(
        "LOG_LEVEL",
        SchemaRule::new(RuleType::String)
            .with_default("info")
            .with_allowed(["debug", "info", "warn"]),
    );

    let result = evaluate(&mut e, &schema, EvaluateOptions::default());

    assert!(result.passed);
    assert_eq!(e.get("LOG_LEVEL").map(String::as_str), Some("info"));
}

#[test]
fn repeated_evaluation_is_stable() {
    let mut e = env(&[("PORT", "70000")]);
    let schema: Schema = [
        (
            "PORT".to_string(),
            SchemaRule::new(RuleType::Number).with_max(65535.0),
        ),
        (
            "TIMEOUT".to_string(),
            SchemaRule::new(RuleType::Number).with_default(30_i64),
        ),
    ]
    .into();

    let first = evaluate(&mut e, &schema, EvaluateOptions::default());
    let second = evaluate(&mut e, &schema, EvaluateOptions::default());

    assert_eq!(first.errors, second.errors);
    assert_eq!(e["TIMEOUT"], "30");
}

#[test]
fn end_to_end_from_text() {
    let mut e = EnvFileParser::parse(
        r#"
# service config
PORT=8080
NODE_ENV=staging
API_KEY="sk_test_abcdefghij"
FEATURE_FLAG=maybe
"#,
    );
    let schema = parse_schema(
        r#"
PORT:
  type: number
  required: true
  min: 1024
NODE_ENV:
  type: string
  allowed: [development, production]
API_KEY:
  type: string
  required: true
  pattern: "^sk_(test|live)_"
FEATURE_FLAG:
  type: boolean
  customError: FEATURE_FLAG must be true or false
DATABASE_URL:
  type: string
"#,
        SchemaFormat::Yaml,
        Path::new("schema.yml"),
    )
    .unwrap();

    let result = evaluate(&mut e, &schema, EvaluateOptions::default());

    assert!(!result.passed);
    assert_eq!(result.error_count(), 2);
    assert_eq!(
        result.error("NODE_ENV"),
        Some("Value 'staging' is not allowed. Expected one of: [development production]")
    );
    assert_eq!(
        result.error("FEATURE_FLAG"),
        Some("FEATURE_FLAG must be true or false")
    );
    assert_eq!(
        result.warning("DATABASE_URL"),
        Some("Missing optional key (ok)")
    );
}
