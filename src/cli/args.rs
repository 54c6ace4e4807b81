//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// env-lint - Validate .env files against a JSON or YAML schema.
#[derive(Debug, Parser)]
#[command(name = "env-lint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Only print errors and the failure verdict
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a .env file against a schema
    Validate(ValidateArgs),

    /// Generate a schema skeleton from an existing .env file
    GenerateSchema(GenerateSchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Path to the .env file
    #[arg(short, long, default_value = ".env", env = "ENV_LINT_ENV_FILE")]
    pub env: PathBuf,

    /// Path to the schema file (.json, .yaml or .yml)
    #[arg(short, long, default_value = "schema.json", env = "ENV_LINT_SCHEMA")]
    pub schema: PathBuf,

    /// Suppress warning messages in output
    #[arg(short = 'w', long)]
    pub suppress_warnings: bool,

    /// Fail if the .env file has keys that are not in the schema
    #[arg(short = 't', long)]
    pub strict_mode: bool,

    /// Stop validation after the first error
    #[arg(short, long)]
    pub fail_fast: bool,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,
}

impl Default for ValidateArgs {
    fn default() -> Self {
        Self {
            env: PathBuf::from(".env"),
            schema: PathBuf::from("schema.json"),
            suppress_warnings: false,
            strict_mode: false,
            fail_fast: false,
            format: "human".to_string(),
        }
    }
}

/// Arguments for the `generate-schema` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GenerateSchemaArgs {
    /// Path to the .env file to read
    #[arg(short, long, default_value = ".env", env = "ENV_LINT_ENV_FILE")]
    pub env: PathBuf,

    /// Output format: json, yaml, yml
    #[arg(short, long, default_value = "json")]
    pub format: String,

    /// Write the schema to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Default for GenerateSchemaArgs {
    fn default() -> Self {
        Self {
            env: PathBuf::from(".env"),
            format: "json".to_string(),
            output: None,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
