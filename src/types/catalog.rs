use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::ModEntry;
use crate::error::CatalogError;

/// Query that selects the curated "new mods" subset when no other is configured.
pub const DEFAULT_NEW_MODS_QUERY: &str = "@new";

/// The full, unfiltered set of mods together with the curated "new" subset.
#[derive(Debug, Clone)]
pub struct ModCatalog {
    entries: Vec<ModEntry>,
    new_mods: HashSet<String>,
    new_mods_query: String,
}

impl Default for ModCatalog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            new_mods: HashSet::new(),
            new_mods_query: DEFAULT_NEW_MODS_QUERY.to_string(),
        }
    }
}

/// On-disk shape of a catalog document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    mods: Vec<ModEntry>,
    new_mods: Vec<String>,
}

impl ModCatalog {
    /// Build a catalog from entries, rejecting duplicate keys.
    pub fn new(entries: Vec<ModEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.key.as_str()) {
                return Err(CatalogError::DuplicateKey {
                    key: entry.key.clone(),
                });
            }
        }
        Ok(Self {
            entries,
            ..Self::default()
        })
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// Accepts either a bare array of mods or an object with `mods` and
    /// `new_mods` fields.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let file = if value.is_array() {
            CatalogFile {
                mods: serde_json::from_value(value)?,
                new_mods: Vec::new(),
            }
        } else {
            serde_json::from_value(value)?
        };
        Ok(Self::new(file.mods)?.with_new_mods(file.new_mods))
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Add keys to the curated "new mods" subset.
    #[must_use]
    pub fn with_new_mods<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.new_mods.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Replace the query that selects the curated subset.
    #[must_use]
    pub fn with_new_mods_query(mut self, query: impl Into<String>) -> Self {
        self.new_mods_query = query.into();
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[ModEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn new_mods_query(&self) -> &str {
        &self.new_mods_query
    }

    /// Whether `key` belongs to the curated "new mods" subset.
    #[must_use]
    pub fn is_new(&self, key: &str) -> bool {
        self.new_mods.contains(key)
    }
}
