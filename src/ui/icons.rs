//! Status vocabulary shared by every output path.

use crate::checks::CheckStatus;

use super::theme::CheckrunTheme;

/// Canonical status kinds used across checkrun output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed or could not run.
    Failed,
    /// Check was not invoked.
    Skipped,
    /// Tool is available but has not run.
    Pending,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Pending => "◌",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &CheckrunTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Skipped | Self::Pending => theme.dim.apply_to(icon).to_string(),
        }
    }
}

impl From<&CheckStatus> for StatusKind {
    fn from(status: &CheckStatus) -> Self {
        match status {
            CheckStatus::Passed => Self::Success,
            CheckStatus::Failed { .. } | CheckStatus::Missing | CheckStatus::Errored { .. } => {
                Self::Failed
            }
            CheckStatus::Skipped(_) => Self::Skipped,
        }
    }
}
