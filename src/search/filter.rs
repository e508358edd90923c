use std::collections::HashSet;

use crate::types::{ModCatalog, ModEntry, title_contains};

/// Select the catalog entries matching `query`.
///
/// Every query character (case-insensitive) pulls in each entry whose title
/// contains it. Entries appear once, at the position of their first match.
/// The catalog's "new mods" query selects the curated subset instead, and an
/// empty query selects nothing.
#[must_use]
pub fn filter_entries(catalog: Option<&ModCatalog>, query: &str) -> Vec<ModEntry> {
    let Some(catalog) = catalog else {
        return Vec::new();
    };
    if query.is_empty() || catalog.is_empty() {
        return Vec::new();
    }

    if query == catalog.new_mods_query() {
        return catalog
            .entries()
            .iter()
            .filter(|entry| catalog.is_new(&entry.key))
            .cloned()
            .collect();
    }

    let lowered = query.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut matches = Vec::new();
    for query_char in lowered.chars() {
        for entry in catalog.entries() {
            if seen.contains(entry.key.as_str()) {
                continue;
            }
            if title_contains(&entry.title, query_char) {
                seen.insert(entry.key.as_str());
                matches.push(entry.clone());
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ModCatalog {
        ModCatalog::new(vec![
            ModEntry::new("a", "Dark Mode", "System UI"),
            ModEntry::new("b", "Light Mode", "System UI"),
            ModEntry::new("c", "Unlock FPS", "Games"),
        ])
        .expect("valid catalog")
        .with_new_mods(["c"])
    }

    fn keys(entries: &[ModEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.key.as_str()).collect()
    }

    #[test]
    fn single_character_selects_containing_titles() {
        let catalog = catalog();
        assert_eq!(keys(&filter_entries(Some(&catalog), "k")), vec!["a", "c"]);
    }

    #[test]
    fn lowercase_d_also_matches_inside_mode() {
        let catalog = ModCatalog::new(vec![
            ModEntry::new("a", "Dark Mode", ""),
            ModEntry::new("b", "Light Mode", ""),
        ])
        .expect("valid catalog");
        assert_eq!(keys(&filter_entries(Some(&catalog), "d")), vec!["a", "b"]);
        assert_eq!(keys(&filter_entries(Some(&catalog), "k")), vec!["a"]);
    }

    #[test]
    fn shared_character_returns_every_holder() {
        let catalog = catalog();
        assert_eq!(keys(&filter_entries(Some(&catalog), "o")), vec!["a", "b", "c"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(keys(&filter_entries(Some(&catalog), "F")), vec!["c"]);
        assert_eq!(keys(&filter_entries(Some(&catalog), "f")), vec!["c"]);
    }

    #[test]
    fn entries_keep_first_match_position_without_duplicates() {
        let catalog = catalog();
        // 'g' only hits "Light Mode"; 'a' then adds "Dark Mode".
        let result = filter_entries(Some(&catalog), "ga");
        assert_eq!(keys(&result), vec!["b", "a"]);

        let result = filter_entries(Some(&catalog), "mode");
        let unique: HashSet<&str> = keys(&result).into_iter().collect();
        assert_eq!(unique.len(), result.len());
    }

    #[test]
    fn empty_query_selects_nothing() {
        let catalog = catalog();
        assert!(filter_entries(Some(&catalog), "").is_empty());
    }

    #[test]
    fn missing_or_empty_catalog_selects_nothing() {
        assert!(filter_entries(None, "mode").is_empty());
        assert!(filter_entries(Some(&ModCatalog::default()), "mode").is_empty());
    }

    #[test]
    fn sentinel_selects_curated_subset() {
        let catalog = catalog().with_new_mods_query("@new");
        assert_eq!(keys(&filter_entries(Some(&catalog), "@new")), vec!["c"]);
    }

    #[test]
    fn sentinel_comparison_is_exact() {
        let catalog = catalog().with_new_mods_query("@new");
        // "@NEW" falls back to character matching: 'n' and 'e' hit titles.
        let result = filter_entries(Some(&catalog), "@NEW");
        assert_eq!(keys(&result), vec!["c", "a", "b"]);
    }

    #[test]
    fn every_result_contains_a_query_character() {
        let catalog = catalog();
        for query in ["x", "dl", "unlock", "zz", "Mo"] {
            let lowered = query.to_lowercase();
            for entry in filter_entries(Some(&catalog), query) {
                assert!(
                    lowered.chars().any(|ch| title_contains(&entry.title, ch)),
                    "{} does not match {query}",
                    entry.title
                );
            }
        }
    }
}
