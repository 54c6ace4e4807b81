//! Contextual hints for env-lint commands.
//!
//! Suggests the logical next action after a command result.

/// Hint when the schema file could not be found.
pub fn missing_schema(env_path: &str) -> String {
    format!(
        "Generate a starting point with `env-lint generate-schema --env {} > schema.json`.",
        env_path
    )
}

/// Hint when strict mode found undeclared keys.
pub fn extra_keys_found() -> &'static str {
    "Declare these keys in the schema, remove them from the env file, or drop --strict-mode."
}

/// Hint after a fail-fast run stopped early.
pub fn stopped_early() -> &'static str {
    "Stopped at the first error. Run without --fail-fast to see every problem."
}
