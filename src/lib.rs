//! env-lint - Validate `.env` files against a JSON or YAML schema.
//!
//! A schema declares, per environment variable, its type (`string`,
//! `number`, `boolean`), whether it is required, a default, allowed values
//! and type-specific constraints. Validation reports per-key errors and
//! warnings and an overall verdict.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.env` and schema file loading
//! - [`error`] - Error types and result aliases
//! - [`schema`] - Schema model, type guessing and schema generation
//! - [`ui`] - Terminal output
//! - [`validator`] - The rule evaluator
//!
//! # Example
//!
//! ```
//! use env_lint::config::EnvFileParser;
//! use env_lint::schema::{RuleType, Schema, SchemaRule};
//! use env_lint::validator::{evaluate, EvaluateOptions};
//!
//! let mut env = EnvFileParser::parse("PORT=8080\nDEBUG=yes\n");
//!
//! let mut schema = Schema::new();
//! schema.insert("PORT".into(), SchemaRule::new(RuleType::Number).required().with_max(9999.0));
//! schema.insert("DEBUG".into(), SchemaRule::new(RuleType::Boolean));
//!
//! let result = evaluate(&mut env, &schema, EvaluateOptions::default());
//! assert!(!result.passed);
//! assert_eq!(result.error("DEBUG"), Some("Expected boolean but got: yes"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod ui;
pub mod validator;

pub use error::{EnvLintError, Result};
