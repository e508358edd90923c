//! List adapter binding a [`ModCatalog`] to a filterable, highlighted list.
//!
//! The adapter owns the visible list ([`ModListStore`]) and a background
//! filter worker. Queries can be applied synchronously with
//! [`ModSearchAdapter::apply_query`] or handed to the worker with
//! [`ModSearchAdapter::submit_query`] and later published by
//! [`ModSearchAdapter::pump_filter_results`]. Every query gets a generation
//! id and only the newest one is ever published, so overlapping requests can
//! not leave the list showing an older query.

mod row;
mod runtime;
mod store;

pub use row::RowView;
pub use store::{FilteredView, ModListStore};

use std::sync::Arc;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use crate::search::{self, FilterResult, Ordering};
use crate::theme::Theme;
use crate::types::{ModCatalog, ModEntry, highlight_positions};

use runtime::FilterRuntime;

/// Receives the entry bound to a row when that row is clicked.
pub trait ItemClickListener: Send + Sync {
    fn on_item_click(&self, entry: &ModEntry);
}

impl<F> ItemClickListener for F
where
    F: Fn(&ModEntry) + Send + Sync,
{
    fn on_item_click(&self, entry: &ModEntry) {
        self(entry);
    }
}

/// Filterable list of mods with per-character highlighting.
pub struct ModSearchAdapter {
    catalog: Option<Arc<ModCatalog>>,
    store: Arc<ModListStore>,
    ordering: Ordering,
    theme: Theme,
    listener: Option<Box<dyn ItemClickListener>>,
    filter: FilterRuntime,
}

impl ModSearchAdapter {
    /// Create an adapter over `catalog`. `None` behaves like an empty catalog.
    #[must_use]
    pub fn new(catalog: Option<Arc<ModCatalog>>) -> Self {
        let (tx, rx, latest_query_id) = search::spawn(catalog.clone());
        Self {
            catalog,
            store: Arc::new(ModListStore::new()),
            ordering: Ordering::default(),
            theme: Theme::default(),
            listener: None,
            filter: FilterRuntime::new(tx, rx, latest_query_id),
        }
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: Ordering) -> Self {
        self.ordering = ordering;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Switch the ordering used for subsequent queries.
    pub fn set_ordering(&mut self, ordering: Ordering) {
        self.ordering = ordering;
    }

    #[must_use]
    pub fn ordering(&self) -> Ordering {
        self.ordering
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Register the callback invoked by [`click`](Self::click).
    pub fn set_on_item_click(&mut self, listener: impl ItemClickListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_on_item_click(&mut self) {
        self.listener = None;
    }

    /// Shared handle to the visible list, for readers on other threads.
    #[must_use]
    pub fn store(&self) -> Arc<ModListStore> {
        Arc::clone(&self.store)
    }

    /// Current published view.
    #[must_use]
    pub fn snapshot(&self) -> Arc<FilteredView> {
        self.store.snapshot()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    /// Lowercased query behind the published list.
    #[must_use]
    pub fn last_query(&self) -> String {
        self.store.snapshot().query.clone()
    }

    /// Whether a submitted query has not been published yet.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        self.filter.is_in_flight()
    }

    /// Filter, rank and publish `query` on the calling thread.
    ///
    /// Any query still running on the worker becomes stale.
    pub fn apply_query(&mut self, query: &str) {
        let generation = self.filter.next_generation();
        let (query, entries) = search::rank_query(self.catalog.as_deref(), query, self.ordering);
        self.filter.settle();
        self.publish(FilteredView {
            generation,
            query,
            entries,
        });
    }

    /// Hand `query` to the background worker and return its generation id.
    ///
    /// The result becomes visible once [`pump_filter_results`] or
    /// [`wait_for_results`] publishes it. When the worker is no longer
    /// running the query is applied synchronously instead.
    ///
    /// [`pump_filter_results`]: Self::pump_filter_results
    /// [`wait_for_results`]: Self::wait_for_results
    pub fn submit_query(&mut self, query: impl Into<String>) -> u64 {
        let query = query.into();
        match self.filter.issue(query.clone(), self.ordering) {
            Some(id) => {
                trace!(id, query = %query, "filter query submitted");
                id
            }
            None => {
                warn!("filter worker unavailable, filtering inline");
                self.apply_query(&query);
                self.filter.latest()
            }
        }
    }

    /// Drain finished worker results, publishing the newest one.
    ///
    /// Returns `true` when the visible list changed.
    pub fn pump_filter_results(&mut self) -> bool {
        let mut published = false;
        loop {
            match self.filter.try_recv() {
                Ok(result) => published |= self.handle_filter_result(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    published |= self.recover_from_disconnect();
                    break;
                }
            }
        }
        published
    }

    /// Block until the latest submitted query is published or `timeout` elapses.
    ///
    /// Returns `true` when nothing is left in flight. If the worker dies with
    /// a query outstanding, that query is applied on the calling thread.
    pub fn wait_for_results(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.filter.is_in_flight() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.filter.recv_timeout(remaining) {
                Ok(result) => {
                    self.handle_filter_result(result);
                }
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => {
                    self.recover_from_disconnect();
                }
            }
        }
        true
    }

    /// Row data for `position` in the published list.
    #[must_use]
    pub fn bind_row(&self, position: usize) -> Option<RowView> {
        let view = self.store.snapshot();
        let entry = view.entries.get(position)?;
        Some(RowView {
            position,
            highlights: highlight_positions(&entry.title, &view.query),
            entry: entry.clone(),
        })
    }

    /// Every row of the published list, in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<RowView> {
        let view = self.store.snapshot();
        view.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| RowView {
                position,
                highlights: highlight_positions(&entry.title, &view.query),
                entry: entry.clone(),
            })
            .collect()
    }

    /// Report the entry at `position` to the click listener.
    ///
    /// Returns `false` when no listener is registered or the position is
    /// outside the published list.
    pub fn click(&self, position: usize) -> bool {
        let Some(listener) = self.listener.as_deref() else {
            debug!(position, "row clicked without a listener");
            return false;
        };
        let view = self.store.snapshot();
        let Some(entry) = view.entries.get(position) else {
            debug!(position, count = view.len(), "click outside published list");
            return false;
        };
        listener.on_item_click(entry);
        true
    }

    fn handle_filter_result(&mut self, result: FilterResult) -> bool {
        if !self.filter.matches_latest(result.id) {
            trace!(
                id = result.id,
                latest = self.filter.latest(),
                "dropping stale filter result"
            );
            return false;
        }
        self.filter.settle();
        self.publish(FilteredView {
            generation: result.id,
            query: result.query,
            entries: result.entries,
        });
        true
    }

    /// Apply the query the worker never answered, if there is one.
    fn recover_from_disconnect(&mut self) -> bool {
        let Some(query) = self.filter.abandon() else {
            debug!("filter worker disconnected");
            return false;
        };
        warn!(query = %query, "filter worker disconnected, filtering inline");
        self.apply_query(&query);
        true
    }

    fn publish(&self, view: FilteredView) {
        debug!(
            generation = view.generation,
            query = %view.query,
            count = view.len(),
            "publishing filtered view"
        );
        self.store.publish(view);
    }
}

impl Drop for ModSearchAdapter {
    fn drop(&mut self) {
        self.filter.shutdown();
    }
}
