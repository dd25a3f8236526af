//! Synchronization primitives for search cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A thread-safe cooperative cancellation token.
///
/// Clones share one flag: the caller, the deadline timer and every pool
/// worker hold a clone. Engines poll it on every descent to the next rank;
/// once raised, they unwind their placements and report an interrupted
/// search.
#[derive(Clone, Debug)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// A lowered flag; searches run to exhaustion.
    #[must_use]
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    /// A raised flag; a search handed this stops at its first descent.
    #[must_use]
    pub fn stopped() -> Self {
        StopFlag(Arc::new(AtomicBool::new(true)))
    }

    /// Whether the search owning this flag must unwind.
    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Ask every search sharing this flag to unwind. Counts found so far
    /// are kept and the run is reported as interrupted.
    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Lower the flag so the next run searches again; called by
    /// `Solver::reset`.
    #[inline]
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_raise_and_lower() {
        let flag = StopFlag::default();
        assert!(!flag.is_stopped());
        flag.stop();
        assert!(flag.is_stopped());
        flag.reset();
        assert!(!flag.is_stopped());
        assert!(StopFlag::stopped().is_stopped());
    }

    #[test]
    fn test_raised_from_another_thread_is_seen_by_every_clone() {
        let flag = StopFlag::new();
        let workers: Vec<StopFlag> = (0..4).map(|_| flag.clone()).collect();

        let raiser = flag.clone();
        thread::spawn(move || raiser.stop()).join().unwrap();

        assert!(workers.iter().all(StopFlag::is_stopped));
    }
}
