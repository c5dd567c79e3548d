//! Health state store.
//!
//! # Responsibilities
//! - Hold exactly one HealthRecord per registered target
//! - Apply probe results and eager outcome reports atomically
//! - Serve ordered healthy-set snapshots to the router
//!
//! # Design Decisions
//! - The target set is fixed for the store's lifetime; registration order
//!   is kept separately so snapshots stay deterministic
//! - Records start healthy (optimistic) so traffic flows before the first
//!   probe tick completes
//! - Mutation happens under a per-record shard lock; readers see the most
//!   recently committed record

use std::time::Instant;

use dashmap::DashMap;

use crate::error::{RouterError, RouterResult};
use crate::target::TargetId;

/// Health bookkeeping for a single target.
#[derive(Debug, Clone)]
pub struct HealthRecord {
    /// Whether the target is currently in the routing rotation.
    pub healthy: bool,

    /// When the target was last probed. `None` until the first probe.
    pub last_checked: Option<Instant>,

    /// Consecutive probe/request failures since the last success.
    pub consecutive_failures: u32,
}

impl HealthRecord {
    fn initial() -> Self {
        Self {
            healthy: true,
            last_checked: None,
            consecutive_failures: 0,
        }
    }
}

/// Concurrent store of per-target health records.
#[derive(Debug)]
pub struct HealthStore {
    records: DashMap<TargetId, HealthRecord>,
    /// Registration order, fixed at construction.
    ordered: Vec<TargetId>,
    unhealthy_threshold: u32,
}

impl HealthStore {
    /// Create a store with one optimistically-healthy record per id.
    pub fn new(ids: Vec<TargetId>, unhealthy_threshold: u32) -> Self {
        let records = DashMap::with_capacity(ids.len());
        for id in &ids {
            records.insert(id.clone(), HealthRecord::initial());
        }
        Self {
            records,
            ordered: ids,
            unhealthy_threshold,
        }
    }

    /// Snapshot the record for one target.
    pub fn record(&self, id: &TargetId) -> RouterResult<HealthRecord> {
        self.records
            .get(id)
            .map(|r| r.clone())
            .ok_or_else(|| RouterError::InvalidTarget(id.clone()))
    }

    /// Apply one scheduled probe result.
    ///
    /// A success resets the failure count and reinstates the target
    /// immediately. A failure increments the count and evicts the target
    /// once the count reaches the configured threshold.
    pub fn record_probe(
        &self,
        id: &TargetId,
        alive: bool,
        checked_at: Instant,
    ) -> RouterResult<()> {
        let mut record = self
            .records
            .get_mut(id)
            .ok_or_else(|| RouterError::InvalidTarget(id.clone()))?;

        record.last_checked = Some(checked_at);

        if alive {
            record.consecutive_failures = 0;
            if !record.healthy {
                record.healthy = true;
                tracing::info!(target_id = %id, "Target recovered, back in rotation");
            }
        } else {
            record.consecutive_failures = record.consecutive_failures.saturating_add(1);
            if record.healthy && record.consecutive_failures >= self.unhealthy_threshold {
                record.healthy = false;
                tracing::warn!(
                    target_id = %id,
                    consecutive_failures = record.consecutive_failures,
                    "Target marked unhealthy, removed from rotation"
                );
            }
        }

        Ok(())
    }

    /// Eagerly evict a target after a caller-observed request failure.
    /// Bypasses the threshold; the next successful probe reinstates it.
    pub fn mark_unhealthy(&self, id: &TargetId) -> RouterResult<()> {
        let mut record = self
            .records
            .get_mut(id)
            .ok_or_else(|| RouterError::InvalidTarget(id.clone()))?;

        record.consecutive_failures = record.consecutive_failures.saturating_add(1);
        if record.healthy {
            record.healthy = false;
            tracing::warn!(target_id = %id, "Target marked unhealthy by caller report");
        }

        Ok(())
    }

    /// Reset the failure count after a caller-observed success.
    /// Does not reinstate an evicted target; recovery requires a probe.
    pub fn note_success(&self, id: &TargetId) -> RouterResult<()> {
        let mut record = self
            .records
            .get_mut(id)
            .ok_or_else(|| RouterError::InvalidTarget(id.clone()))?;

        record.consecutive_failures = 0;
        Ok(())
    }

    /// Snapshot of currently healthy ids, in registration order.
    pub fn healthy_ids(&self) -> Vec<TargetId> {
        self.ordered
            .iter()
            .filter(|id| self.records.get(*id).map(|r| r.healthy).unwrap_or(false))
            .cloned()
            .collect()
    }

    /// Snapshot of all records, in registration order. Read-only monitoring
    /// surface.
    pub fn records(&self) -> Vec<(TargetId, HealthRecord)> {
        self.ordered
            .iter()
            .filter_map(|id| self.records.get(id).map(|r| (id.clone(), r.clone())))
            .collect()
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<TargetId> {
        names.iter().map(|n| TargetId::from(*n)).collect()
    }

    #[test]
    fn test_initially_all_healthy() {
        let store = HealthStore::new(ids(&["a", "b", "c"]), 1);
        assert_eq!(store.healthy_ids(), ids(&["a", "b", "c"]));

        let record = store.record(&TargetId::from("a")).unwrap();
        assert!(record.healthy);
        assert!(record.last_checked.is_none());
        assert_eq!(record.consecutive_failures, 0);
    }

    #[test]
    fn test_failure_below_threshold_keeps_target() {
        let store = HealthStore::new(ids(&["a"]), 3);
        let a = TargetId::from("a");

        store.record_probe(&a, false, Instant::now()).unwrap();
        store.record_probe(&a, false, Instant::now()).unwrap();

        let record = store.record(&a).unwrap();
        assert!(record.healthy);
        assert_eq!(record.consecutive_failures, 2);
    }

    #[test]
    fn test_threshold_evicts_and_one_success_reinstates() {
        let store = HealthStore::new(ids(&["a", "b"]), 2);
        let b = TargetId::from("b");

        store.record_probe(&b, false, Instant::now()).unwrap();
        store.record_probe(&b, false, Instant::now()).unwrap();
        assert_eq!(store.healthy_ids(), ids(&["a"]));

        store.record_probe(&b, true, Instant::now()).unwrap();
        assert_eq!(store.healthy_ids(), ids(&["a", "b"]));
        assert_eq!(store.record(&b).unwrap().consecutive_failures, 0);
    }

    #[test]
    fn test_success_resets_failure_streak() {
        let store = HealthStore::new(ids(&["a"]), 3);
        let a = TargetId::from("a");

        store.record_probe(&a, false, Instant::now()).unwrap();
        store.record_probe(&a, false, Instant::now()).unwrap();
        store.record_probe(&a, true, Instant::now()).unwrap();
        store.record_probe(&a, false, Instant::now()).unwrap();

        // Streak restarted after the success, so still healthy.
        let record = store.record(&a).unwrap();
        assert!(record.healthy);
        assert_eq!(record.consecutive_failures, 1);
    }

    #[test]
    fn test_eager_mark_bypasses_threshold() {
        let store = HealthStore::new(ids(&["a", "b"]), 5);
        let a = TargetId::from("a");

        store.mark_unhealthy(&a).unwrap();
        assert_eq!(store.healthy_ids(), ids(&["b"]));

        // Scheduled probe success still reinstates.
        store.record_probe(&a, true, Instant::now()).unwrap();
        assert_eq!(store.healthy_ids(), ids(&["a", "b"]));
    }

    #[test]
    fn test_note_success_does_not_reinstate() {
        let store = HealthStore::new(ids(&["a"]), 1);
        let a = TargetId::from("a");

        store.mark_unhealthy(&a).unwrap();
        store.note_success(&a).unwrap();

        let record = store.record(&a).unwrap();
        assert!(!record.healthy);
        assert_eq!(record.consecutive_failures, 0);
    }

    #[test]
    fn test_unknown_id_is_invalid_target() {
        let store = HealthStore::new(ids(&["a"]), 1);
        let ghost = TargetId::from("ghost");

        assert!(matches!(
            store.record(&ghost),
            Err(RouterError::InvalidTarget(_))
        ));
        assert!(matches!(
            store.record_probe(&ghost, true, Instant::now()),
            Err(RouterError::InvalidTarget(_))
        ));
        assert!(matches!(
            store.mark_unhealthy(&ghost),
            Err(RouterError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_records_snapshot_keeps_registration_order() {
        let store = HealthStore::new(ids(&["c", "a", "b"]), 1);
        let snapshot = store.records();
        let order: Vec<&str> = snapshot.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }
}
