use crate::types::ModEntry;

use super::Ordering;

/// Commands understood by the background filter worker.
#[derive(Debug)]
pub(crate) enum FilterCommand {
    /// Filter and rank the catalog for the provided query.
    Query {
        /// Generation id that lets the adapter drop superseded results.
        id: u64,
        /// Raw query as typed by the user.
        query: String,
        /// Ordering applied before the result is sent back.
        ordering: Ordering,
    },
    /// Stop the background worker thread.
    Shutdown,
}

/// Ranked entries produced for one [`FilterCommand::Query`].
#[derive(Debug)]
pub(crate) struct FilterResult {
    /// Identifier matching the originating query.
    pub(crate) id: u64,
    /// Lowercased query used for ranking and highlighting.
    pub(crate) query: String,
    pub(crate) entries: Vec<ModEntry>,
}
