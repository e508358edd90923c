//! Filterable mod list: per-character search over a catalog of mods,
//! frequency ranking and match highlighting, with filtering done off the
//! rendering thread.
//!
//! The root module re-exports the types an embedder needs so it can wire an
//! adapter to its list widget without digging through the module hierarchy.

pub mod adapter;
pub mod app_dirs;
pub mod error;
pub mod logging;
pub mod search;
pub mod theme;
pub mod types;

pub use adapter::{FilteredView, ItemClickListener, ModListStore, ModSearchAdapter, RowView};
pub use error::CatalogError;
pub use search::{Ordering, filter_entries, frequency, rank_query};
pub use theme::Theme;
pub use types::{DEFAULT_NEW_MODS_QUERY, ModCatalog, ModEntry, highlight_positions};
