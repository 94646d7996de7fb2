//! Semantic color palette for terminal output.

use owo_colors::{OwoColorize, Style};

fn paint(text: &impl std::fmt::Display, style: Style) -> String {
    if super::no_color() {
        text.to_string()
    } else {
        text.style(style).to_string()
    }
}

/// Trait extension to apply semantic styles.
pub trait SemanticStyle {
    /// Green bold, for matches.
    fn success(&self) -> String;
    /// Red bold, for mismatches and read failures.
    fn error(&self) -> String;
    /// Dimmed, for secondary details.
    fn muted(&self) -> String;
    /// Bold.
    fn header(&self) -> String;
    /// Blue, for hex values and paths.
    fn code(&self) -> String;
}

impl<T: std::fmt::Display> SemanticStyle for T {
    fn success(&self) -> String {
        paint(self, Style::new().green().bold())
    }

    fn error(&self) -> String {
        paint(self, Style::new().red().bold())
    }

    fn muted(&self) -> String {
        paint(self, Style::new().dimmed())
    }

    fn header(&self) -> String {
        paint(self, Style::new().bold())
    }

    fn code(&self) -> String {
        paint(self, Style::new().blue())
    }
}
