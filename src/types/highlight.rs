use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::entry::char_matches;

/// Character positions of `title` to mark for the lowercased `query`.
///
/// Each query character marks the first title character that matches it.
/// Positions count chars of the original title and come back sorted and
/// deduplicated.
#[must_use]
pub fn highlight_positions(title: &str, query: &str) -> Vec<usize> {
    let mut positions: Vec<usize> = query
        .chars()
        .filter_map(|query_char| title.chars().position(|ch| char_matches(ch, query_char)))
        .collect();
    positions.sort_unstable();
    positions.dedup();
    positions
}

/// Build a styled line that marks `positions` within `text`.
pub(crate) fn highlight_line(
    text: &str,
    positions: &[usize],
    base: Style,
    highlight: Style,
) -> Line<'static> {
    if positions.is_empty() {
        return Line::from(Span::styled(text.to_string(), base));
    }

    let mut next = positions.iter().copied().peekable();
    let mut buffer = String::new();
    let mut highlighted = false;
    let mut spans = Vec::new();

    for (idx, ch) in text.chars().enumerate() {
        let should_highlight = next.peek().copied() == Some(idx);
        if should_highlight {
            next.next();
        }
        if should_highlight != highlighted {
            if !buffer.is_empty() {
                let style = if highlighted { highlight } else { base };
                spans.push(Span::styled(mem::take(&mut buffer), style));
            }
            highlighted = should_highlight;
        }
        buffer.push(ch);
    }

    if !buffer.is_empty() {
        let style = if highlighted { highlight } else { base };
        spans.push(Span::styled(buffer, style));
    }

    Line::from(spans)
}

/// Wrap each marked run of `text` in brackets for terminals without colour.
pub(crate) fn bracket_marked(text: &str, positions: &[usize]) -> String {
    let mut out = String::with_capacity(text.len() + positions.len() * 2);
    let mut next = positions.iter().copied().peekable();
    let mut open = false;
    for (idx, ch) in text.chars().enumerate() {
        let marked = next.peek().copied() == Some(idx);
        if marked {
            next.next();
        }
        if marked && !open {
            out.push('[');
            open = true;
        } else if !marked && open {
            out.push(']');
            open = false;
        }
        out.push(ch);
    }
    if open {
        out.push(']');
    }
    out
}
