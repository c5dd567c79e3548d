//! Round-robin selection over a healthy snapshot.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::target::TargetId;

/// Round-robin cursor.
/// Stores an internal counter to rotate through the healthy set.
#[derive(Debug, Default)]
pub struct RoundRobin {
    counter: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next id from a healthy snapshot.
    ///
    /// The counter wraps modulo the snapshot length, so the cursor's
    /// position is relative to the live healthy list on every call. Exact
    /// fairness holds while the set is stable; membership changes may skew
    /// at most one rotation.
    pub fn next(&self, healthy: &[TargetId]) -> Option<TargetId> {
        if healthy.is_empty() {
            return None;
        }

        let cursor = self.counter.fetch_add(1, Ordering::Relaxed);
        Some(healthy[cursor % healthy.len()].clone())
    }
}
