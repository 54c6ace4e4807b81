//! Rendering of validation results for humans.

use crate::ui::{hints, Severity, UserInterface};
use crate::validator::ValidationResult;

/// Presentation flags for [`show_report`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub suppress_warnings: bool,
    pub strict: bool,
    pub fail_fast: bool,
}

/// Print a validation result: finding rows, extra keys and the verdict.
pub fn show_report(ui: &mut dyn UserInterface, result: &ValidationResult, options: ReportOptions) {
    ui.show_separator();

    if result.passed {
        ui.verdict(true, "All checks passed. Your .env config looks great!");
        if !options.suppress_warnings {
            show_warnings(ui, result);
        }
        return;
    }

    for (key, message) in &result.errors {
        ui.show_finding(Severity::Error, key, message);
    }
    if !options.suppress_warnings {
        show_warnings(ui, result);
    }

    if options.strict && !result.extra_keys.is_empty() {
        ui.error(&format!(
            "Strict mode: extra keys found in .env not in schema: {}",
            result.extra_keys.join(", ")
        ));
        ui.show_hint(hints::extra_keys_found());
    }

    if options.fail_fast && !result.errors.is_empty() {
        ui.show_hint(hints::stopped_early());
    }

    ui.verdict(false, "Validation failed. Please fix the errors above.");
}

fn show_warnings(ui: &mut dyn UserInterface, result: &ValidationResult) {
    for (key, message) in &result.warnings {
        ui.show_finding(Severity::Warning, key, message);
    }
}
