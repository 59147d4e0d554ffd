//! Trigger dispatch for re-evaluation.
//!
//! Three independent event sources re-invoke the session controller:
//! persisted-state change notifications, a periodic tick, and
//! content-mutation notifications. All three are treated identically -- each
//! just requests an idempotent re-evaluation -- so they share one small
//! bounded queue. A single worker drains it, collapsing bursts into one
//! evaluation instead of running once per trigger.

use tokio::sync::mpsc;

/// Why a re-evaluation was requested. Carried for logging only; every
/// trigger leads to the same evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    StateChanged,
    Tick,
    ContentMutated,
}

/// Sender half handed to event sources.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::Sender<Trigger>,
}

impl Dispatcher {
    /// Request a re-evaluation. Returns whether the request was newly
    /// enqueued; a full queue means an evaluation is already pending, which
    /// covers this trigger too.
    pub fn request(&self, trigger: Trigger) -> bool {
        self.tx.try_send(trigger).is_ok()
    }
}

/// Receiver half owned by the single evaluation worker.
pub struct EvaluationQueue {
    rx: mpsc::Receiver<Trigger>,
}

impl EvaluationQueue {
    /// Wait for the next request, coalescing everything already queued
    /// behind it. Returns `None` once every dispatcher handle is dropped.
    pub async fn next_request(&mut self) -> Option<Trigger> {
        let mut trigger = self.rx.recv().await?;
        while let Ok(queued) = self.rx.try_recv() {
            trigger = queued;
        }
        Some(trigger)
    }
}

/// Create a dispatch queue. `capacity` bounds how many requests can pile up
/// while the worker is busy; one is enough for correctness.
pub fn evaluation_queue(capacity: usize) -> (Dispatcher, EvaluationQueue) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (Dispatcher { tx }, EvaluationQueue { rx })
}
