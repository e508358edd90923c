use ratatui::text::Line;
use ratatui::widgets::{Cell, Row};

use crate::theme::Theme;
use crate::types::ModEntry;
use crate::types::highlight::{bracket_marked, highlight_line};

/// Render-ready data for one list position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub position: usize,
    pub entry: ModEntry,
    /// Title character positions matched by the published query.
    pub highlights: Vec<usize>,
}

impl RowView {
    /// Title with matched characters drawn in the theme's highlight style.
    #[must_use]
    pub fn title_line(&self, theme: &Theme) -> Line<'static> {
        highlight_line(
            &self.entry.title,
            &self.highlights,
            theme.title,
            theme.highlight_style(),
        )
    }

    /// Breadcrumbs rendered as plain text.
    #[must_use]
    pub fn breadcrumbs_line(&self, theme: &Theme) -> Line<'static> {
        Line::styled(self.entry.breadcrumbs.clone(), theme.breadcrumbs)
    }

    /// Two-column table row: highlighted title, then breadcrumbs.
    #[must_use]
    pub fn to_row(&self, theme: &Theme) -> Row<'static> {
        Row::new(vec![
            Cell::from(self.title_line(theme)),
            Cell::from(self.breadcrumbs_line(theme)),
        ])
    }

    /// Title with matched runs wrapped in brackets.
    #[must_use]
    pub fn marked_title(&self) -> String {
        bracket_marked(&self.entry.title, &self.highlights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::{Constraint, Rect};
    use ratatui::style::Color;
    use ratatui::widgets::{Table, Widget};

    fn row() -> RowView {
        RowView {
            position: 0,
            entry: ModEntry::new("a", "Dark Mode", "System UI"),
            highlights: vec![1],
        }
    }

    #[test]
    fn title_line_highlights_only_marked_positions() {
        let theme = Theme::with_highlight(Color::Cyan);
        let line = row().title_line(&theme);
        let highlighted: Vec<&str> = line
            .spans
            .iter()
            .filter(|span| span.style == theme.highlight_style())
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec!["a"]);
    }

    #[test]
    fn breadcrumbs_are_plain() {
        let theme = Theme::default();
        let line = row().breadcrumbs_line(&theme);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, "System UI");
    }

    #[test]
    fn table_row_draws_title_then_breadcrumbs() {
        let theme = Theme::with_highlight(Color::Cyan);
        let table = Table::new(
            vec![row().to_row(&theme)],
            [Constraint::Length(9), Constraint::Length(9)],
        );
        let mut buf = Buffer::empty(Rect::new(0, 0, 19, 1));
        table.render(buf.area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "D");
        assert_eq!(buf[(0, 0)].fg, Color::Reset);
        assert_eq!(buf[(1, 0)].symbol(), "a");
        assert_eq!(buf[(1, 0)].fg, Color::Cyan);
        assert_eq!(buf[(10, 0)].symbol(), "S");
        assert_eq!(buf[(10, 0)].fg, Color::DarkGray);
    }

    #[test]
    fn marked_title_brackets_matches() {
        assert_eq!(row().marked_title(), "D[a]rk Mode");
    }
}
