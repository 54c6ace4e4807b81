//! Error types for env-lint operations.
//!
//! This module defines [`EnvLintError`], the error type used for everything
//! that can go wrong *around* validation: reading files, parsing schemas,
//! serializing generated output. Validation findings themselves are data
//! and live in [`ValidationResult`](crate::validator::ValidationResult).
//!
//! # Error Handling Strategy
//!
//! - Use `EnvLintError` for failures that need distinct handling or messages
//! - Use `anyhow::Error` (via `EnvLintError::Other`) for unexpected errors
//! - All errors should name the file involved so users can act on them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for env-lint operations.
#[derive(Debug, Error)]
pub enum EnvLintError {
    /// The `.env` file does not exist.
    #[error("Env file not found: {path}")]
    EnvFileNotFound { path: PathBuf },

    /// The schema file does not exist.
    #[error("Schema file not found: {path}")]
    SchemaNotFound { path: PathBuf },

    /// The schema file exists but could not be parsed.
    #[error("Failed to parse schema at {path}: {message}")]
    SchemaParseError { path: PathBuf, message: String },

    /// The schema file extension is not `.json`, `.yaml` or `.yml`.
    #[error("Unsupported schema format '{extension}': {path}")]
    UnsupportedSchemaFormat { path: PathBuf, extension: String },

    /// Unknown output format name.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },

    /// Failed to serialize output.
    #[error("Failed to serialize {what}: {message}")]
    Serialize { what: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for env-lint operations.
pub type Result<T> = std::result::Result<T, EnvLintError>;
