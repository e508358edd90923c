use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, trace};

use super::commands::{FilterCommand, FilterResult};
use super::rank_query;
use crate::types::ModCatalog;

/// Launches the background filter worker and returns its communication channels.
pub(crate) fn spawn(
    catalog: Option<Arc<ModCatalog>>,
) -> (Sender<FilterCommand>, Receiver<FilterResult>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let latest_query_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_query_id);

    thread::spawn(move || worker_loop(catalog.as_deref(), command_rx, result_tx, thread_latest));

    (command_tx, result_rx, latest_query_id)
}

fn worker_loop(
    catalog: Option<&ModCatalog>,
    command_rx: Receiver<FilterCommand>,
    result_tx: Sender<FilterResult>,
    latest_query_id: Arc<AtomicU64>,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(catalog, &result_tx, &latest_query_id, command) {
            break;
        }
    }
    debug!("filter worker stopped");
}

fn handle_command(
    catalog: Option<&ModCatalog>,
    result_tx: &Sender<FilterResult>,
    latest_query_id: &AtomicU64,
    command: FilterCommand,
) -> bool {
    match command {
        FilterCommand::Query {
            id,
            query,
            ordering,
        } => {
            if should_abort(id, latest_query_id) {
                trace!(id, "skipping superseded query");
                return true;
            }
            let (query, entries) = rank_query(catalog, &query, ordering);
            if should_abort(id, latest_query_id) {
                trace!(id, "dropping superseded result");
                return true;
            }
            result_tx
                .send(FilterResult { id, query, entries })
                .is_ok()
        }
        FilterCommand::Shutdown => false,
    }
}

fn should_abort(id: u64, latest_query_id: &AtomicU64) -> bool {
    latest_query_id.load(AtomicOrdering::Acquire) != id
}
