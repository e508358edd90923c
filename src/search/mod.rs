//! Filtering, ranking and the background worker that runs them.

mod commands;
mod filter;
mod ranking;
mod worker;

pub(crate) use commands::{FilterCommand, FilterResult};
pub use filter::filter_entries;
pub use ranking::{Ordering, compare_breadcrumbs, frequency};
pub(crate) use worker::spawn;

use crate::types::{ModCatalog, ModEntry};

/// Filter `catalog` for `query` and sort the matches with `ordering`.
///
/// Returns the lowercased query alongside the ranked entries so callers can
/// highlight with the exact text that was used for ranking.
#[must_use]
pub fn rank_query(
    catalog: Option<&ModCatalog>,
    query: &str,
    ordering: Ordering,
) -> (String, Vec<ModEntry>) {
    let mut entries = filter_entries(catalog, query);
    let lowered = query.to_lowercase();
    ordering.sort(&mut entries, &lowered);
    (lowered, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_results_respect_frequency() {
        let catalog = ModCatalog::new(vec![
            ModEntry::new("a", "Light Mode", ""),
            ModEntry::new("b", "Dark Mode", ""),
            ModEntry::new("c", "Unlock", ""),
        ])
        .expect("valid catalog");

        let (query, entries) = rank_query(Some(&catalog), "ARK", Ordering::Frequency);
        assert_eq!(query, "ark");
        for pair in entries.windows(2) {
            assert!(frequency(&pair[0].title, &query) >= frequency(&pair[1].title, &query));
        }
        assert_eq!(entries[0].key, "b");
    }
}
