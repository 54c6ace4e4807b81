//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Progress messages, findings and verdict.
    #[default]
    Normal,
    /// Errors, error findings and the final verdict only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status and progress messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
