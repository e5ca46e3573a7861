//! Visual theme and styling.

use console::Style;

/// checkrun's visual theme.
#[derive(Debug, Clone)]
pub struct CheckrunTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for running elements (magenta).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for durations (dim).
    pub duration: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for CheckrunTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckrunTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            duration: Style::new().dim(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
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
            highlight: Style::new(),
            header: Style::new(),
            duration: Style::new(),
            command: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Colored theme when stdout supports it, plain otherwise.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
