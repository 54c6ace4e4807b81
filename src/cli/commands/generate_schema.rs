//! Generate-schema command implementation.
//!
//! The `env-lint generate-schema` command turns an existing `.env` file into
//! a schema skeleton with guessed types and the current values as defaults.

use std::fs;

use anyhow::Context;

use crate::cli::args::GenerateSchemaArgs;
use crate::config::EnvFileParser;
use crate::error::{EnvLintError, Result};
use crate::schema::{generate_schema, render_schema, SchemaFormat};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The generate-schema command implementation.
pub struct GenerateSchemaCommand {
    args: GenerateSchemaArgs,
}

impl GenerateSchemaCommand {
    /// Create a new generate-schema command.
    pub fn new(args: GenerateSchemaArgs) -> Self {
        Self { args }
    }

    /// Read the env file and render the schema text.
    pub fn render(&self) -> Result<String> {
        let format: SchemaFormat = self.args.format.parse()?;
        let env = EnvFileParser::load(&self.args.env)?;
        let schema = generate_schema(&env);
        render_schema(&schema, format)
    }
}

impl Command for GenerateSchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rendered = match self.render() {
            Ok(text) => text,
            Err(e @ EnvLintError::EnvFileNotFound { .. }) => {
                ui.error(&format!("Error reading env file: {}", e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        match &self.args.output {
            Some(path) => {
                fs::write(path, ensure_trailing_newline(rendered))
                    .with_context(|| format!("Failed to write schema to {}", path.display()))?;
                ui.success(&format!("Schema written to {}", path.display()));
            }
            None => print!("{}", ensure_trailing_newline(rendered)),
        }

        Ok(CommandResult::success())
    }
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
