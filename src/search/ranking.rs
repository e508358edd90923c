use std::cmp::{Ordering as CmpOrdering, Reverse};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::ModEntry;

/// Strategy used to order filtered entries before they are published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    /// Most query characters found in the title first.
    #[default]
    Frequency,
    /// Breadcrumbs, then title, both ignoring case.
    Breadcrumb,
}

impl Ordering {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Breadcrumb => "breadcrumb",
        }
    }

    /// Stable-sort `entries` in place for the lowercased `query`.
    pub fn sort(self, entries: &mut [ModEntry], query: &str) {
        match self {
            Self::Frequency => {
                entries.sort_by_cached_key(|entry| Reverse(frequency(&entry.title, query)));
            }
            Self::Breadcrumb => entries.sort_by(compare_breadcrumbs),
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ordering {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "frequency" => Ok(Self::Frequency),
            "breadcrumb" | "breadcrumbs" => Ok(Self::Breadcrumb),
            other => Err(format!("unknown ordering '{other}'")),
        }
    }
}

/// Number of query characters present in `title`.
///
/// Comparison is exact: `query` is expected to be lowercased already, while
/// the title is taken as stored. A character repeated in the query counts
/// once per repetition.
#[must_use]
pub fn frequency(title: &str, query: &str) -> usize {
    query.chars().filter(|ch| title.contains(*ch)).count()
}

/// Order by breadcrumbs, falling back to the title, ignoring case.
#[must_use]
pub fn compare_breadcrumbs(left: &ModEntry, right: &ModEntry) -> CmpOrdering {
    compare_ignore_case(&left.breadcrumbs, &right.breadcrumbs)
        .then_with(|| compare_ignore_case(&left.title, &right.title))
}

fn compare_ignore_case(left: &str, right: &str) -> CmpOrdering {
    let left = left.chars().flat_map(char::to_lowercase);
    let right = right.chars().flat_map(char::to_lowercase);
    left.cmp(right)
}
