//! .env file parsing.
//!
//! Reads environment files in the usual `KEY=value` format into a map.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EnvLintError, Result};

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Exported: `export KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Inline comments: `PORT=3000 # http port` (unquoted values only)
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///
/// Later assignments of the same key win.
///
/// # Example
///
/// ```
/// use env_lint::config::EnvFileParser;
///
/// let content = r#"
/// # Database config
/// DATABASE_URL=postgres://localhost/db
/// export DEBUG="true"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("DATABASE_URL"), Some(&"postgres://localhost/db".to_string()));
/// assert_eq!(vars.get("DEBUG"), Some(&"true".to_string()));
/// assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(Self::parse_line)
            .collect()
    }

    fn parse_line(line: &str) -> Option<(String, String)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        Some((key.to_string(), Self::parse_value(value.trim())))
    }

    /// Quoted values end at the closing quote; anything after it is ignored.
    /// Unquoted values end at the first `#` that follows whitespace.
    fn parse_value(value: &str) -> String {
        for quote in ['"', '\''] {
            if let Some(end) = value
                .strip_prefix(quote)
                .and_then(|rest| rest.find(quote))
            {
                return value[1..=end].to_string();
            }
        }
        Self::strip_inline_comment(value).to_string()
    }

    fn strip_inline_comment(value: &str) -> &str {
        let comment = value
            .char_indices()
            .find(|&(i, c)| c == '#' && value[..i].ends_with(char::is_whitespace));
        match comment {
            Some((i, _)) => value[..i].trim_end(),
            None => value,
        }
    }

    /// Load and parse an env file from a path.
    pub fn load(path: &Path) -> Result<HashMap<String, String>> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EnvLintError::EnvFileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                EnvLintError::Io(e)
            }
        })?;
        let vars = Self::parse(&content);
        tracing::debug!(path = %path.display(), count = vars.len(), "loaded env file");
        Ok(vars)
    }
}
