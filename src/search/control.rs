//! Shared progress and cancellation handles
//!
//! Both are cheap `Arc` clones over atomics, so a shell can keep one copy
//! while worker threads update the other without locking.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Cooperative stop signal, polled between permutations.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    stopped: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Re-arm the token for the next evaluation
    pub fn reset(&self) {
        self.stopped.store(false, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Progress listener invoked with a percentage (0-100)
pub type ProgressListener = Arc<dyn Fn(u8) + Send + Sync>;

#[derive(Debug, Default)]
struct Counter {
    evaluated: AtomicUsize,
    total: AtomicUsize,
}

/// Candidates evaluated so far out of the candidates to evaluate.
///
/// The engine only ever increments; readers poll `percent()` at whatever
/// cadence suits them.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    counter: Arc<Counter>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new evaluation over `total` candidates
    pub(crate) fn begin(&self, total: usize) {
        self.counter.evaluated.store(0, Ordering::Relaxed);
        self.counter.total.store(total, Ordering::Relaxed);
    }

    /// Record one finished candidate and return the new percentage
    pub(crate) fn advance(&self) -> u8 {
        let evaluated = self.counter.evaluated.fetch_add(1, Ordering::Relaxed) + 1;
        percent_of(evaluated, self.counter.total.load(Ordering::Relaxed))
    }

    /// Mark the evaluation as complete (fast paths skip the per-candidate loop)
    pub(crate) fn finish(&self) {
        let total = self.counter.total.load(Ordering::Relaxed);
        self.counter.evaluated.store(total, Ordering::Relaxed);
    }

    pub fn evaluated(&self) -> usize {
        self.counter.evaluated.load(Ordering::Relaxed)
    }

    pub fn total(&self) -> usize {
        self.counter.total.load(Ordering::Relaxed)
    }

    pub fn percent(&self) -> u8 {
        percent_of(self.evaluated(), self.total())
    }
}

#[inline]
fn percent_of(evaluated: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((evaluated.min(total) * 100) / total) as u8
}
