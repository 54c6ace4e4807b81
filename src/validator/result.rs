//! Validation outcome.

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of validating an environment against a schema.
///
/// Errors and warnings hold at most one message per key. Maps are sorted
/// by key so rendering is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Overall verdict.
    pub passed: bool,
    /// Key to error message.
    pub errors: BTreeMap<String, String>,
    /// Key to warning message.
    pub warnings: BTreeMap<String, String>,
    /// Environment keys with no schema entry (strict mode only), sorted.
    pub extra_keys: Vec<String>,
}

impl ValidationResult {
    /// Number of keys with an error.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Number of keys with a warning.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Error message recorded for a key.
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    /// Warning message recorded for a key.
    pub fn warning(&self, key: &str) -> Option<&str> {
        self.warnings.get(key).map(String::as_str)
    }

    /// Copy of this result with warnings dropped, for `--suppress-warnings`.
    pub fn without_warnings(&self) -> Self {
        Self {
            warnings: BTreeMap::new(),
            ..self.clone()
        }
    }
}
