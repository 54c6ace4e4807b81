//! Visual theme and styling.

use console::Style;

use super::Severity;

/// Width of the key column in finding rows.
const KEY_WIDTH: usize = 25;

/// env-lint's visual theme.
#[derive(Debug, Clone)]
pub struct EnvLintTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning rows (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational headers (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for key names in finding rows (bold).
    pub key: Style,
}

impl Default for EnvLintTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLintTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.info.apply_to(format!("🔍 {}", title)))
    }

    /// Format a hint line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("{}", self.dim.apply_to(format!("  hint: {}", hint)))
    }

    /// Format a `LABEL  KEY  message` row.
    ///
    /// Padding is applied before styling so columns line up with or
    /// without ANSI codes.
    pub fn format_finding(&self, severity: Severity, key: &str, message: &str) -> String {
        let style = match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
        };
        format!(
            "{} {} {}",
            style.apply_to(format!("{:<7}", severity.label())),
            self.key.apply_to(format!("{:<width$}", key, width = KEY_WIDTH)),
            message
        )
    }

    /// Format a horizontal separator.
    pub fn format_separator(&self) -> String {
        format!("{}", self.dim.apply_to("━".repeat(72)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = EnvLintTheme::plain().format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_error() {
        let msg = EnvLintTheme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn finding_columns_are_padded() {
        let row = EnvLintTheme::plain().format_finding(Severity::Error, "PORT", "bad");
        assert_eq!(row, format!("ERROR   PORT{} bad", " ".repeat(21)));
    }

    #[test]
    fn long_keys_are_not_truncated() {
        let key = "A_VERY_LONG_ENVIRONMENT_VARIABLE_NAME";
        let row = EnvLintTheme::plain().format_finding(Severity::Warning, key, "meh");
        assert!(row.starts_with("WARN    "));
        assert!(row.contains(key));
        assert!(row.ends_with(" meh"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = EnvLintTheme::default();
        let new = EnvLintTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
