use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Shared progress and cancellation state for one running operation.
///
/// The caller keeps a reference for polling and cancelling while the
/// operation resets totals and counts finished units. The counter is
/// the only state workers touch concurrently and it is atomic, so
/// workers never block each other.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    label: Mutex<String>,
    total: AtomicU64,
    done: AtomicU64,
    cancelled: AtomicBool,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new phase: set its label and unit total, zero the counter.
    /// Does not clear a pending cancellation request.
    pub fn reset(&self, label: &str, total: u64) {
        let mut guard = match self.label.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clear();
        guard.push_str(label);
        drop(guard);
        self.total.store(total, Ordering::Relaxed);
        self.done.store(0, Ordering::Relaxed);
    }

    /// Record one finished unit of work.
    pub fn increment(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
    }

    /// Request cooperative cancellation. Workers observe this between
    /// units; the request is sticky until the tracker is dropped.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Point-in-time view for UIs and logs.
    pub fn snapshot(&self) -> ProgressSnapshot {
        let label = match self.label.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        ProgressSnapshot {
            label,
            done: self.done.load(Ordering::Relaxed),
            total: self.total.load(Ordering::Relaxed),
            cancelled: self.is_cancelled(),
        }
    }
}

/// Copy of tracker state at one instant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProgressSnapshot {
    pub label: String,
    pub done: u64,
    pub total: u64,
    pub cancelled: bool,
}
