//! Validate command implementation.
//!
//! The `env-lint validate` command checks a `.env` file against a schema.

use std::str::FromStr;

use crate::cli::args::ValidateArgs;
use crate::config::{load_schema, EnvFileParser};
use crate::error::{EnvLintError, Result};
use crate::ui::{hints, UserInterface};
use crate::validator::{evaluate, EvaluateOptions, ValidationResult};

use super::display::{show_report, ReportOptions};
use super::dispatcher::{Command, CommandResult};

/// How the validation result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

impl FromStr for ReportFormat {
    type Err = EnvLintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(EnvLintError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(args: ValidateArgs) -> Self {
        Self { args }
    }

    fn options(&self) -> EvaluateOptions {
        EvaluateOptions {
            fail_fast: self.args.fail_fast,
            strict: self.args.strict_mode,
        }
    }

    fn print_json(&self, result: &ValidationResult) -> Result<()> {
        let result = if self.args.suppress_warnings {
            result.without_warnings()
        } else {
            result.clone()
        };
        let json =
            serde_json::to_string_pretty(&result).map_err(|e| EnvLintError::Serialize {
                what: "validation result".to_string(),
                message: e.to_string(),
            })?;
        println!("{}", json);
        Ok(())
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let format: ReportFormat = self.args.format.parse()?;
        let human = format == ReportFormat::Human;

        let mut env = match EnvFileParser::load(&self.args.env) {
            Ok(env) => env,
            Err(e @ EnvLintError::EnvFileNotFound { .. }) => {
                ui.error(&format!("Failed to read .env file: {}", e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };
        if human {
            ui.success(".env file loaded successfully");
        }

        let schema = match load_schema(&self.args.schema) {
            Ok(schema) => schema,
            Err(e @ EnvLintError::SchemaNotFound { .. }) => {
                ui.error(&format!("Failed to read schema file: {}", e));
                ui.show_hint(&hints::missing_schema(&self.args.env.display().to_string()));
                return Ok(CommandResult::failure(1));
            }
            Err(
                e @ (EnvLintError::SchemaParseError { .. }
                | EnvLintError::UnsupportedSchemaFormat { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };
        if human {
            ui.success("Schema file loaded successfully");
            ui.show_header("Validating environment variables...");
        }

        let result = evaluate(&mut env, &schema, self.options());
        tracing::debug!(
            passed = result.passed,
            errors = result.error_count(),
            warnings = result.warning_count(),
            extra_keys = result.extra_keys.len(),
            "validation finished"
        );

        match format {
            ReportFormat::Json => self.print_json(&result)?,
            ReportFormat::Human => show_report(
                ui,
                &result,
                ReportOptions {
                    suppress_warnings: self.args.suppress_warnings,
                    strict: self.args.strict_mode,
                    fail_fast: self.args.fail_fast,
                },
            ),
        }

        if result.passed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
