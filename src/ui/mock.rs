//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use env_lint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Schema file loaded successfully");
//! ui.verdict(false, "Validation failed");
//!
//! assert!(ui.has_success("Schema file loaded"));
//! assert_eq!(ui.verdicts(), [(false, "Validation failed".to_string())]);
//! ```

use super::{Severity, UserInterface};

/// A captured finding row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub key: String,
    pub message: String,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    successes: Vec<String>,
    errors: Vec<String>,
    verdicts: Vec<(bool, String)>,
    headers: Vec<String>,
    hints: Vec<String>,
    findings: Vec<Finding>,
    separators: usize,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all verdicts, as `(passed, message)`.
    pub fn verdicts(&self) -> &[(bool, String)] {
        &self.verdicts
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured finding rows.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Findings of one severity, in display order.
    pub fn findings_of(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    /// Number of separators shown.
    pub fn separators(&self) -> usize {
        self.separators
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a verdict containing `msg` was shown.
    pub fn has_verdict(&self, msg: &str) -> bool {
        self.verdicts.iter().any(|(_, m)| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if a finding was shown for a key.
    pub fn has_finding(&self, key: &str) -> bool {
        self.findings.iter().any(|f| f.key == key)
    }
}

impl UserInterface for MockUI {
    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn verdict(&mut self, passed: bool, msg: &str) {
        self.verdicts.push((passed, msg.to_string()));
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn show_finding(&mut self, severity: Severity, key: &str, message: &str) {
        self.findings.push(Finding {
            severity,
            key: key.to_string(),
            message: message.to_string(),
        });
    }

    fn show_separator(&mut self) {
        self.separators += 1;
    }
}
