//! Color theme definitions for the browser
//!
//! Defines colors and styles used throughout the interactive session.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the browser
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the selected row
    pub selection_bg: Color,
    /// Foreground color for the selected row
    pub selection_fg: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/secondary text
    pub dimmed: Color,
    /// Color for titles and highlighted labels
    pub info: Color,
    /// Color for record kind tags
    pub kind_tag: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            info: Color::Cyan,
            kind_tag: Color::Magenta,
        }
    }

    /// Style for the row under the cursor
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unselected rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for titles and active labels
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.info)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for record kind tags
    #[must_use]
    pub fn kind_tag_style(&self) -> Style {
        Style::default().fg(self.kind_tag)
    }
}
