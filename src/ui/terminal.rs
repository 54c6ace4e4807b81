//! Console-backed UI.

use console::Term;

use super::{should_use_colors, EnvLintTheme, OutputMode, Severity, UserInterface};

/// Terminal UI implementation.
///
/// Regular output goes to stdout, errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: EnvLintTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            EnvLintTheme::new()
        } else {
            EnvLintTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: EnvLintTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }

    fn write_out(&self, line: &str) {
        self.out.write_line(line).ok();
    }

    fn write_err(&self, line: &str) {
        self.err.write_line(line).ok();
    }
}

impl UserInterface for TerminalUI {
    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.write_out(&self.theme.format_success(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        self.write_err(&self.theme.format_error(msg));
    }

    fn verdict(&mut self, passed: bool, msg: &str) {
        if passed {
            self.write_out(&self.theme.format_success(msg));
        } else {
            self.write_err(&self.theme.format_error(msg));
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.write_out(&format!("\n{}", self.theme.format_header(title)));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            self.write_out(&self.theme.format_hint(hint));
        }
    }

    fn show_finding(&mut self, severity: Severity, key: &str, message: &str) {
        if severity == Severity::Warning && !self.mode.shows_status() {
            return;
        }
        self.write_out(&self.theme.format_finding(severity, key, message));
    }

    fn show_separator(&mut self) {
        if self.mode.shows_status() {
            self.write_out(&self.theme.format_separator());
        }
    }
}

/// Create the UI used by the binary.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_mode_writes_without_panic() {
        let mut ui = TerminalUI::with_theme(OutputMode::Quiet, EnvLintTheme::plain());
        ui.success("hidden");
        ui.show_finding(Severity::Warning, "KEY", "hidden");
        ui.show_separator();
        ui.verdict(true, "shown");
    }
}
