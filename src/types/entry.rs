use serde::{Deserialize, Serialize};

/// A single searchable mod as it appears in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModEntry {
    /// Stable identifier, unique within a catalog.
    pub key: String,
    /// Display title matched against the query.
    pub title: String,
    /// Secondary label describing where the mod lives.
    #[serde(default, alias = "breadcrumb")]
    pub breadcrumbs: String,
}

impl ModEntry {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        breadcrumbs: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            breadcrumbs: breadcrumbs.into(),
        }
    }
}

/// Whether a title character matches an already lowercased query character.
pub(crate) fn char_matches(title_char: char, query_char: char) -> bool {
    title_char.to_lowercase().any(|lower| lower == query_char)
}

/// Case-insensitive containment of a lowercased query character in `title`.
pub(crate) fn title_contains(title: &str, query_char: char) -> bool {
    title.chars().any(|ch| char_matches(ch, query_char))
}
