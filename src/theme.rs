use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

/// Colour used for matched characters when nothing else is configured.
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::Yellow;

/// Styles applied when rendering list rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub breadcrumbs: Style,
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_highlight(DEFAULT_HIGHLIGHT_COLOR)
    }
}

impl Theme {
    /// Default theme with matched characters drawn in `color`.
    #[must_use]
    pub fn with_highlight(color: Color) -> Self {
        Self {
            title: Style::default(),
            breadcrumbs: Style::default().fg(Color::DarkGray),
            highlight: Style::default().fg(color).add_modifier(Modifier::BOLD),
        }
    }

    /// Parse a colour name or `#rrggbb` value into a theme.
    pub fn from_color_name(name: &str) -> Option<Self> {
        Color::from_str(name.trim()).ok().map(Self::with_highlight)
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }
}
