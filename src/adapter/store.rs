use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::ModEntry;

/// One published filter result: the entries on screen and the query that
/// produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    /// Generation id of the query that produced this view, `0` before any.
    pub generation: u64,
    /// Lowercased query used for ranking and highlighting.
    pub query: String,
    pub entries: Vec<ModEntry>,
}

impl FilteredView {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Copy-on-publish container backing the visible list.
///
/// Readers take a cheap `Arc` snapshot and keep it for as long as they
/// render; publishing swaps in a whole new view, so a reader never sees a
/// list that is half old and half new.
#[derive(Debug, Default)]
pub struct ModListStore {
    current: RwLock<Arc<FilteredView>>,
}

impl ModListStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view. Later publishes do not affect the returned snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<FilteredView> {
        Arc::clone(&self.current.read())
    }

    /// Replace the visible list wholesale.
    pub fn publish(&self, view: FilteredView) {
        *self.current.write() = Arc::new(view);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn view(generation: u64, size: usize) -> FilteredView {
        FilteredView {
            generation,
            query: format!("q{generation}"),
            entries: (0..size)
                .map(|idx| ModEntry::new(format!("k{idx}"), format!("Mod {idx}"), ""))
                .collect(),
        }
    }

    #[test]
    fn starts_empty() {
        let store = ModListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.snapshot().generation, 0);
    }

    #[test]
    fn snapshots_survive_publish() {
        let store = ModListStore::new();
        store.publish(view(1, 3));
        let before = store.snapshot();
        store.publish(view(2, 1));

        assert_eq!(before.len(), 3);
        assert_eq!(before.query, "q1");
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot().generation, 2);
    }

    #[test]
    fn concurrent_readers_never_observe_torn_views() {
        let store = Arc::new(ModListStore::new());
        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for generation in 1..=200u64 {
                    store.publish(view(generation, (generation % 7) as usize));
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let snapshot = store.snapshot();
                        if snapshot.generation == 0 {
                            continue;
                        }
                        assert_eq!(snapshot.len(), (snapshot.generation % 7) as usize);
                        assert_eq!(snapshot.query, format!("q{}", snapshot.generation));
                    }
                })
            })
            .collect();

        writer.join().expect("writer thread");
        for reader in readers {
            reader.join().expect("reader thread");
        }
    }
}
