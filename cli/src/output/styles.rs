//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Running instances (green)
    pub success: Style,
    /// Transitional instance states (yellow)
    pub warning: Style,
    /// Info messages (blue)
    pub info: Style,
    /// Dimmed/secondary text
    pub dim: Style,
    /// Table headings
    pub header: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.header = Style::new().bold().cyan();
    }

    /// Style for an instance lifecycle status as reported by Compute Engine.
    #[must_use]
    pub fn for_status(&self, status: &str) -> Style {
        match status {
            "RUNNING" => self.success,
            "TERMINATED" | "STOPPED" | "SUSPENDED" => self.dim,
            _ => self.warning,
        }
    }
}
