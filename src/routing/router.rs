//! Public routing facade.
//!
//! # Responsibilities
//! - Own the target registry, health store, selector, and prober lifecycle
//! - Expose route_request / report_outcome / start / shutdown
//!
//! # Design Decisions
//! - Constructed once from a fixed target list; adding or removing targets
//!   means rebuilding the router
//! - No ambient global state: everything hangs off this struct, shared by
//!   reference wherever requests are issued

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::HealthCheckConfig;
use crate::error::{RouterError, RouterResult};
use crate::health::prober::HealthMonitor;
use crate::health::store::{HealthRecord, HealthStore};
use crate::lifecycle::Shutdown;
use crate::routing::round_robin::RoundRobin;
use crate::target::{Target, TargetId};

/// Health-aware round-robin router over a fixed set of targets.
pub struct TargetRouter {
    targets: Arc<Vec<Arc<Target>>>,
    by_id: HashMap<TargetId, Arc<Target>>,
    store: Arc<HealthStore>,
    selector: RoundRobin,
    config: HealthCheckConfig,
    shutdown: Shutdown,
    started: AtomicBool,
}

impl TargetRouter {
    /// Build a router from registered targets and health-check settings.
    ///
    /// Rejects an empty target list and duplicate ids. Every target starts
    /// healthy; the first probe tick corrects that optimism if needed.
    pub fn new(targets: Vec<Target>, config: HealthCheckConfig) -> RouterResult<Self> {
        if targets.is_empty() {
            return Err(RouterError::EmptyRegistry);
        }

        let targets: Vec<Arc<Target>> = targets.into_iter().map(Arc::new).collect();

        let mut by_id = HashMap::with_capacity(targets.len());
        let mut ordered = Vec::with_capacity(targets.len());
        for target in &targets {
            if by_id.insert(target.id.clone(), target.clone()).is_some() {
                return Err(RouterError::DuplicateTarget(target.id.clone()));
            }
            ordered.push(target.id.clone());
        }

        let store = Arc::new(HealthStore::new(ordered, config.unhealthy_threshold));

        Ok(Self {
            targets: Arc::new(targets),
            by_id,
            store,
            selector: RoundRobin::new(),
            config,
            shutdown: Shutdown::new(),
            started: AtomicBool::new(false),
        })
    }

    /// Start the background health prober. Idempotent; calling twice is a
    /// no-op.
    pub fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }

        let monitor = HealthMonitor::new(
            self.targets.clone(),
            self.store.clone(),
            self.config.clone(),
        );
        let shutdown = self.shutdown.subscribe();

        tokio::spawn(monitor.run(shutdown));
    }

    /// Select the next healthy target, round-robin.
    ///
    /// Returns an opaque handle the caller uses for its own I/O. Never
    /// blocks on the prober; reads a snapshot that may lag one probe
    /// interval.
    pub fn route_request(&self) -> RouterResult<Arc<Target>> {
        let healthy = self.store.healthy_ids();
        let id = self
            .selector
            .next(&healthy)
            .ok_or(RouterError::NoHealthyTarget)?;

        self.by_id
            .get(&id)
            .cloned()
            .ok_or(RouterError::InvalidTarget(id))
    }

    /// Eagerly report the outcome of a request the caller just ran.
    ///
    /// A failure evicts the target immediately, without waiting for the
    /// next scheduled probe; the target still recovers automatically once
    /// a scheduled probe succeeds. A success resets the target's failure
    /// streak.
    pub fn report_outcome(&self, id: &TargetId, success: bool) -> RouterResult<()> {
        if success {
            self.store.note_success(id)
        } else {
            self.store.mark_unhealthy(id)
        }
    }

    /// Stop the health prober. Safe to call repeatedly and concurrently
    /// with an in-progress tick. Target-owned resources are untouched;
    /// those belong to the caller.
    pub fn shutdown(&self) {
        self.shutdown.trigger();
    }

    /// Snapshot of currently healthy target ids, in registration order.
    pub fn healthy_ids(&self) -> Vec<TargetId> {
        self.store.healthy_ids()
    }

    /// Snapshot of all health records. Read-only monitoring surface.
    pub fn health_records(&self) -> Vec<(TargetId, HealthRecord)> {
        self.store.records()
    }
}
