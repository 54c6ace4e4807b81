//! Rule evaluation.
//!
//! Keys are visited in schema order. For each key the checks run as:
//! presence (and default application), allowed values, then the
//! type-specific checks. A later failing check overwrites the error
//! recorded by an earlier one for the same key.

use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::ops::ControlFlow;
use tracing::debug;

use crate::schema::{format_value_list, RuleType, Schema, SchemaRule};

use super::result::ValidationResult;

const MISSING_REQUIRED: &str = "Missing required key";
const MISSING_USING_DEFAULT: &str = "Missing optional key — using default";
const MISSING_OPTIONAL: &str = "Missing optional key (ok)";

/// Execution modes for [`evaluate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluateOptions {
    /// Stop at the first error.
    pub fail_fast: bool,
    /// Treat environment keys missing from the schema as failures.
    pub strict: bool,
}

/// Validate an environment map against a schema.
///
/// `env` is an in/out parameter: when an optional key is absent and its
/// rule has a default, the default's string form is inserted into `env`
/// before the remaining checks run against it.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use env_lint::schema::{RuleType, Schema, SchemaRule};
/// use env_lint::validator::{evaluate, EvaluateOptions};
///
/// let mut env = HashMap::from([("PORT".to_string(), "abc".to_string())]);
/// let mut schema = Schema::new();
/// schema.insert("PORT".to_string(), SchemaRule::new(RuleType::Number).required());
///
/// let result = evaluate(&mut env, &schema, EvaluateOptions::default());
/// assert!(!result.passed);
/// assert_eq!(result.error("PORT"), Some("Expected number but got: abc"));
/// ```
pub fn evaluate(
    env: &mut HashMap<String, String>,
    schema: &Schema,
    options: EvaluateOptions,
) -> ValidationResult {
    let mut evaluator = Evaluator::new(options);

    for (key, rule) in schema {
        debug!(key = %key, rule_type = %rule.rule_type, "checking key");
        if evaluator.check_key(env, key, rule).is_break() {
            debug!(key = %key, "fail-fast: stopping at first error");
            return evaluator.finish(Vec::new());
        }
    }

    let extra_keys = if options.strict {
        let mut extra: Vec<String> = env
            .keys()
            .filter(|k| !schema.contains_key(*k))
            .cloned()
            .collect();
        extra.sort();
        debug!(count = extra.len(), "strict mode: scanned for extra keys");
        extra
    } else {
        Vec::new()
    };

    evaluator.finish(extra_keys)
}

struct Evaluator {
    options: EvaluateOptions,
    errors: BTreeMap<String, String>,
    warnings: BTreeMap<String, String>,
}

impl Evaluator {
    fn new(options: EvaluateOptions) -> Self {
        Self {
            options,
            errors: BTreeMap::new(),
            warnings: BTreeMap::new(),
        }
    }

    fn finish(self, extra_keys: Vec<String>) -> ValidationResult {
        let passed =
            self.errors.is_empty() && (!self.options.strict || extra_keys.is_empty());
        ValidationResult {
            passed,
            errors: self.errors,
            warnings: self.warnings,
            extra_keys,
        }
    }

    fn warn(&mut self, key: &str, message: impl Into<String>) {
        self.warnings.insert(key.to_string(), message.into());
    }

    /// Record an error verbatim.
    fn fail_plain(&mut self, key: &str, message: impl Into<String>) -> ControlFlow<()> {
        self.errors.insert(key.to_string(), message.into());
        if self.options.fail_fast {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Record an error, substituting the rule's custom message if it has one.
    fn fail(&mut self, key: &str, rule: &SchemaRule, message: String) -> ControlFlow<()> {
        let message = rule.custom_error().map(str::to_string).unwrap_or(message);
        self.fail_plain(key, message)
    }

    fn check_key(
        &mut self,
        env: &mut HashMap<String, String>,
        key: &str,
        rule: &SchemaRule,
    ) -> ControlFlow<()> {
        let value = match env.get(key).cloned() {
            Some(value) => value,
            None if rule.required => return self.fail_plain(key, MISSING_REQUIRED),
            None => match &rule.default {
                Some(default) => {
                    let value = default.to_string();
                    env.insert(key.to_string(), value.clone());
                    self.warn(key, MISSING_USING_DEFAULT);
                    value
                }
                None => {
                    self.warn(key, MISSING_OPTIONAL);
                    return ControlFlow::Continue(());
                }
            },
        };

        if !rule.allowed.is_empty() && !rule.allowed.iter().any(|a| a.matches(&value)) {
            let message = format!(
                "Value '{}' is not allowed. Expected one of: {}",
                value,
                format_value_list(&rule.allowed)
            );
            self.fail(key, rule, message)?;
        }

        match &rule.rule_type {
            RuleType::String => self.check_string(key, rule, &value),
            RuleType::Number => self.check_number(key, rule, &value),
            RuleType::Boolean => self.check_boolean(key, rule, &value),
            RuleType::Unknown(name) => {
                self.warn(key, format!("Unknown type '{}' — skipping check", name));
                ControlFlow::Continue(())
            }
        }
    }

    fn check_string(&mut self, key: &str, rule: &SchemaRule, value: &str) -> ControlFlow<()> {
        if let Some(pattern) = rule.pattern() {
            match Regex::new(pattern) {
                Ok(re) if !re.is_match(value) => {
                    let message = format!("Value does not match pattern: {}", pattern);
                    self.fail(key, rule, message)?;
                }
                Ok(_) => {}
                Err(e) => {
                    debug!(key = %key, error = %e, "schema pattern does not compile");
                    self.warn(key, format!("Invalid regex pattern: {}", pattern));
                }
            }
        }

        let len = i64::try_from(value.len()).unwrap_or(i64::MAX);
        if let Some(length) = rule.length.filter(|&n| len != n) {
            let message = format!("Expected string of length [{}] but got: {}", length, value);
            self.fail(key, rule, message)?;
        }
        if let Some(max) = rule.max_length.filter(|&n| len > n) {
            let message = format!("Expected max length [{}] but got: {}", max, value);
            self.fail(key, rule, message)?;
        }
        if let Some(min) = rule.min_length.filter(|&n| len < n) {
            let message = format!("Expected min length [{}] but got: {}", min, value);
            self.fail(key, rule, message)?;
        }

        ControlFlow::Continue(())
    }

    fn check_number(&mut self, key: &str, rule: &SchemaRule, value: &str) -> ControlFlow<()> {
        let Ok(num) = value.parse::<f64>() else {
            let message = format!("Expected number but got: {}", value);
            return self.fail(key, rule, message);
        };

        if let Some(min) = rule.min.filter(|&m| num < m) {
            let message = format!("Expected number >= {:.2} but got: {:.2}", min, num);
            self.fail(key, rule, message)?;
        }
        if let Some(max) = rule.max.filter(|&m| num > m) {
            let message = format!("Expected number <= {:.2} but got: {:.2}", max, num);
            self.fail(key, rule, message)?;
        }

        ControlFlow::Continue(())
    }

    fn check_boolean(&mut self, key: &str, rule: &SchemaRule, value: &str) -> ControlFlow<()> {
        if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            return ControlFlow::Continue(());
        }
        let message = format!("Expected boolean but got: {}", value);
        self.fail(key, rule, message)
    }
}
