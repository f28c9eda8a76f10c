//! UI Theme - glyphs, markers, and marker colors
//!
//! Centralizes every visual element a spinner row can show so the render
//! loop and the final-line painter agree on them.

use crate::config::SpinnerConfig;

/// Braille animation frames, advanced once per repaint pass.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Final-state markers
#[derive(Debug, Clone)]
pub struct Icons {
    /// Success marker (✓)
    pub success: &'static str,
    /// Failure marker (✗)
    pub failure: &'static str,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            success: "✓",
            failure: "✗",
        }
    }
}

/// How a spinner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub frames: &'static [&'static str],
    pub icons: Icons,
    pub success_color: String,
    pub failure_color: String,
}

impl Theme {
    pub fn from_config(config: &SpinnerConfig) -> Self {
        Self {
            frames: &SPINNER_FRAMES,
            icons: Icons::default(),
            success_color: config.success_color.clone(),
            failure_color: config.failure_color.clone(),
        }
    }

    /// Color escape and marker for a final line.
    pub fn marker(&self, outcome: Outcome) -> (&str, &'static str) {
        match outcome {
            Outcome::Success => (self.success_color.as_str(), self.icons.success),
            Outcome::Failure => (self.failure_color.as_str(), self.icons.failure),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&SpinnerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.icons.success, "✓");
        assert_eq!(theme.icons.failure, "✗");
        assert_eq!(theme.frames.len(), 10);
        assert_eq!(theme.frames[0], "⠋");
    }

    #[test]
    fn test_marker_uses_configured_colors() {
        let config = SpinnerConfig::default()
            .with_success_color("\x1b[34m")
            .with_failure_color("\x1b[35m");
        let theme = Theme::from_config(&config);

        assert_eq!(theme.marker(Outcome::Success), ("\x1b[34m", "✓"));
        assert_eq!(theme.marker(Outcome::Failure), ("\x1b[35m", "✗"));
    }
}
