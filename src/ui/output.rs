//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output, including passing tools' output.
    Verbose,
    /// Show progress, status, and failing tools' output.
    #[default]
    Normal,
    /// Show spinners and final status only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows output of tools that passed.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows diagnostics of tools that failed.
    pub fn shows_failure_output(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal | Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
