//! Schema file loading.
//!
//! The file extension picks the parser: `.json` for JSON, `.yaml` or `.yml`
//! for YAML.

use std::fs;
use std::path::Path;

use crate::error::{EnvLintError, Result};
use crate::schema::{Schema, SchemaFormat};

/// Determine the schema format from a path's extension.
pub fn schema_format_for(path: &Path) -> Result<SchemaFormat> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    match extension.to_lowercase().as_str() {
        "json" => Ok(SchemaFormat::Json),
        "yaml" | "yml" => Ok(SchemaFormat::Yaml),
        _ => Err(EnvLintError::UnsupportedSchemaFormat {
            path: path.to_path_buf(),
            extension: format!(".{}", extension),
        }),
    }
}

/// Load a schema file, choosing the parser by extension.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let format = schema_format_for(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvLintError::SchemaNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvLintError::Io(e)
        }
    })?;

    let schema = parse_schema(&content, format, path)?;
    tracing::debug!(path = %path.display(), rules = schema.len(), "loaded schema");
    Ok(schema)
}

/// Parse schema text in the given format.
///
/// `source_path` is only used for error messages.
pub fn parse_schema(content: &str, format: SchemaFormat, source_path: &Path) -> Result<Schema> {
    let parse_error = |message: String| EnvLintError::SchemaParseError {
        path: source_path.to_path_buf(),
        message,
    };

    match format {
        SchemaFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        SchemaFormat::Yaml => {
            // An empty YAML document is an empty schema.
            if content.trim().is_empty() {
                return Ok(Schema::new());
            }
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
    }
}
