//! Data types shared by the filter, the worker and the presentation layer.

mod catalog;
mod entry;
pub(crate) mod highlight;

pub use catalog::{DEFAULT_NEW_MODS_QUERY, ModCatalog};
pub use entry::ModEntry;
pub(crate) use entry::title_contains;
pub use highlight::highlight_positions;
