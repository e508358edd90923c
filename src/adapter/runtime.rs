use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use crate::search::{FilterCommand, FilterResult, Ordering};

/// Channel ends and generation bookkeeping for the background filter worker.
pub(crate) struct FilterRuntime {
    tx: Sender<FilterCommand>,
    rx: Receiver<FilterResult>,
    latest_query_id: Arc<AtomicU64>,
    next_query_id: u64,
    in_flight: bool,
    pending_query: Option<String>,
}

impl FilterRuntime {
    pub(crate) fn new(
        tx: Sender<FilterCommand>,
        rx: Receiver<FilterResult>,
        latest_query_id: Arc<AtomicU64>,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_query_id,
            next_query_id: 0,
            in_flight: false,
            pending_query: None,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(FilterCommand::Shutdown);
    }

    /// Reserve a new generation id; anything issued earlier becomes stale.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.next_query_id = self.next_query_id.saturating_add(1);
        let id = self.next_query_id;
        self.latest_query_id.store(id, AtomicOrdering::Release);
        id
    }

    /// Send `query` to the worker under a fresh generation id.
    ///
    /// Returns the id, or `None` when the worker is gone.
    pub(crate) fn issue(&mut self, query: String, ordering: Ordering) -> Option<u64> {
        let id = self.next_generation();
        self.in_flight = true;
        self.pending_query = Some(query.clone());
        self.tx
            .send(FilterCommand::Query {
                id,
                query,
                ordering,
            })
            .ok()
            .map(|()| id)
    }

    /// Mark the in-flight query as settled without a worker answer.
    pub(crate) fn settle(&mut self) {
        self.in_flight = false;
        self.pending_query = None;
    }

    /// Settle and hand back the query still waiting on the worker, if any.
    pub(crate) fn abandon(&mut self) -> Option<String> {
        let pending = self.pending_query.take().filter(|_| self.in_flight);
        self.settle();
        pending
    }

    pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
        result_id == self.next_query_id
    }

    pub(crate) fn latest(&self) -> u64 {
        self.next_query_id
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn try_recv(&mut self) -> Result<FilterResult, TryRecvError> {
        self.rx.try_recv()
    }

    pub(crate) fn recv_timeout(
        &mut self,
        timeout: Duration,
    ) -> Result<FilterResult, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn runtime() -> (FilterRuntime, Receiver<FilterCommand>) {
        let (tx, command_rx) = mpsc::channel();
        let (_result_tx, rx) = mpsc::channel();
        let runtime = FilterRuntime::new(tx, rx, Arc::new(AtomicU64::new(0)));
        (runtime, command_rx)
    }

    #[test]
    fn issuing_advances_the_shared_generation() {
        let (mut runtime, commands) = runtime();
        let first = runtime.issue("a".into(), Ordering::Frequency).expect("issue");
        let second = runtime.issue("ab".into(), Ordering::Frequency).expect("issue");

        assert!(second > first);
        assert!(runtime.matches_latest(second));
        assert!(!runtime.matches_latest(first));
        assert_eq!(runtime.latest_query_id.load(AtomicOrdering::Acquire), second);
        assert!(runtime.is_in_flight());
        assert_eq!(commands.try_iter().count(), 2);
    }

    #[test]
    fn issue_reports_disconnected_worker() {
        let (mut runtime, commands) = runtime();
        drop(commands);
        assert!(runtime.issue("a".into(), Ordering::Frequency).is_none());
    }

    #[test]
    fn abandon_returns_the_unanswered_query_once() {
        let (mut runtime, _commands) = runtime();
        runtime.issue("a".into(), Ordering::Frequency).expect("issue");
        runtime.issue("ab".into(), Ordering::Frequency).expect("issue");

        assert_eq!(runtime.abandon().as_deref(), Some("ab"));
        assert!(!runtime.is_in_flight());
        assert_eq!(runtime.abandon(), None);
    }

    #[test]
    fn settled_queries_are_not_handed_back() {
        let (mut runtime, _commands) = runtime();
        runtime.issue("a".into(), Ordering::Frequency).expect("issue");
        runtime.settle();
        assert_eq!(runtime.abandon(), None);
    }
}
