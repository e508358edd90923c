use std::io::Write;

use anyhow::Result;
use modsift::{RowView, Theme};
use ratatui::crossterm::style::{self as term, Attribute, Stylize};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use serde_json::json;
use unicode_width::UnicodeWidthStr;

const ATTRIBUTES: [(Modifier, Attribute); 6] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::REVERSED, Attribute::Reverse),
    (Modifier::CROSSED_OUT, Attribute::CrossedOut),
];

/// Write rows as aligned `title  breadcrumbs` lines with matches in brackets.
pub(crate) fn write_plain(out: &mut impl Write, query: &str, rows: &[RowView]) -> Result<()> {
    let cells = rows.iter().map(|row| {
        let title = row.marked_title();
        let width = title.width();
        (title, width, row.entry.breadcrumbs.clone())
    });
    write_aligned(out, query, cells.collect())
}

/// Write rows as aligned lines drawn with the theme's terminal colours.
pub(crate) fn write_styled(
    out: &mut impl Write,
    query: &str,
    rows: &[RowView],
    theme: &Theme,
) -> Result<()> {
    let cells = rows.iter().map(|row| {
        (
            ansi_line(&row.title_line(theme)),
            row.entry.title.width(),
            ansi_line(&row.breadcrumbs_line(theme)),
        )
    });
    write_aligned(out, query, cells.collect())
}

/// `cells` holds the rendered title, its display width and the breadcrumbs.
fn write_aligned(
    out: &mut impl Write,
    query: &str,
    cells: Vec<(String, usize, String)>,
) -> Result<()> {
    if cells.is_empty() {
        writeln!(out, "No matches (query: '{query}')")?;
        return Ok(());
    }

    let width = cells.iter().map(|(_, width, _)| *width).max().unwrap_or(0);
    for (title, title_width, breadcrumbs) in &cells {
        let padding = width - title_width;
        writeln!(out, "{title}{:padding$}  {breadcrumbs}", "")?;
    }
    Ok(())
}

fn ansi_line(line: &Line<'_>) -> String {
    line.spans
        .iter()
        .map(|span| ansi_span(&span.content, line.style.patch(span.style)))
        .collect()
}

fn ansi_span(text: &str, style: Style) -> String {
    if style == Style::default() {
        return text.to_owned();
    }
    let mut content = term::style(text);
    if let Some(fg) = style.fg {
        content = content.with(fg.into());
    }
    if let Some(bg) = style.bg {
        content = content.on(bg.into());
    }
    for (modifier, attribute) in ATTRIBUTES {
        if style.add_modifier.contains(modifier) {
            content = content.attribute(attribute);
        }
    }
    content.to_string()
}

/// Format rows as a pretty JSON document.
pub(crate) fn format_rows_json(query: &str, rows: &[RowView]) -> Result<String> {
    let rows: Vec<_> = rows
        .iter()
        .map(|row| {
            json!({
                "key": row.entry.key,
                "title": row.entry.title,
                "breadcrumbs": row.entry.breadcrumbs,
                "highlights": row.highlights,
            })
        })
        .collect();

    let payload = json!({
        "query": query,
        "count": rows.len(),
        "rows": rows,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Write the JSON representation of the rows.
pub(crate) fn write_json(out: &mut impl Write, query: &str, rows: &[RowView]) -> Result<()> {
    writeln!(out, "{}", format_rows_json(query, rows)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use modsift::ModEntry;
    use ratatui::style::Color;
    use serde_json::Value;

    use super::*;

    fn rows() -> Vec<RowView> {
        vec![
            RowView {
                position: 0,
                entry: ModEntry::new("a", "Dark Mode", "System UI"),
                highlights: vec![1],
            },
            RowView {
                position: 1,
                entry: ModEntry::new("c", "FPS", "Games"),
                highlights: vec![],
            },
        ]
    }

    #[test]
    fn json_includes_highlights() {
        let json = format_rows_json("a", &rows()).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["count"], 2);
        assert_eq!(value["rows"][0]["key"], "a");
        assert_eq!(value["rows"][0]["highlights"][0], 1);
        assert_eq!(value["rows"][1]["breadcrumbs"], "Games");
    }

    #[test]
    fn plain_output_aligns_breadcrumbs() {
        let mut out = Vec::new();
        write_plain(&mut out, "a", &rows()).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "D[a]rk Mode  System UI");
        assert_eq!(lines[1], "FPS          Games");
    }

    #[test]
    fn styled_output_colours_matches_without_brackets() {
        let mut out = Vec::new();
        let theme = Theme::with_highlight(Color::Red);
        write_styled(&mut out, "a", &rows(), &theme).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with('D'));
        assert!(lines[0].contains("\u{1b}[38;5;1m"));
        assert!(lines[0].contains("rk Mode"));
        assert!(lines[0].contains("System UI"));
        assert!(!lines[0].contains("[a]"));
        // Unmatched titles stay unstyled and are padded by display width.
        assert!(lines[1].starts_with("FPS        "));
    }

    #[test]
    fn styled_output_follows_the_theme() {
        let render = |theme: Theme| {
            let mut out = Vec::new();
            write_styled(&mut out, "a", &rows(), &theme).expect("write");
            String::from_utf8(out).expect("utf8")
        };
        assert_ne!(render(Theme::default()), render(Theme::with_highlight(Color::Red)));
    }

    #[test]
    fn plain_output_reports_no_matches() {
        let mut out = Vec::new();
        write_plain(&mut out, "zz", &[]).expect("write");
        assert_eq!(String::from_utf8(out).expect("utf8"), "No matches (query: 'zz')\n");
    }
}
