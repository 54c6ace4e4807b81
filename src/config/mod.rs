//! Input loading for env-lint.
//!
//! - `.env` parsing in [`env_file`]
//! - JSON/YAML schema loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use env_lint::config::{load_schema, EnvFileParser};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".env"), "PORT=3000\n").unwrap();
//! fs::write(temp.path().join("schema.json"), r#"{"PORT": {"type": "number"}}"#).unwrap();
//!
//! let env = EnvFileParser::load(&temp.path().join(".env")).unwrap();
//! let schema = load_schema(&temp.path().join("schema.json")).unwrap();
//! assert_eq!(env.len(), schema.len());
//! ```

pub mod env_file;
pub mod loader;

pub use env_file::EnvFileParser;
pub use loader::{load_schema, parse_schema, schema_format_for};
