//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] for real console output
//! - [`MockUI`] capturing everything for assertions
//!
//! # Example
//!
//! ```
//! use env_lint::ui::{MockUI, Severity, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_finding(Severity::Error, "PORT", "Missing required key");
//! assert!(ui.has_finding("PORT"));
//! ```

pub mod hints;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, EnvLintTheme};

/// Severity of a per-key finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Row label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARN",
        }
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show the overall pass/fail line. Shown in every output mode.
    fn verdict(&mut self, passed: bool, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Show a suggestion for what to do next.
    fn show_hint(&mut self, hint: &str);

    /// Show one `LABEL  KEY  message` row.
    fn show_finding(&mut self, severity: Severity, key: &str, message: &str);

    /// Show a horizontal separator.
    fn show_separator(&mut self);
}
