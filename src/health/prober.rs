//! Scheduled liveness probing.
//!
//! # Responsibilities
//! - Periodically probe every registered target
//! - Update the health store with each result
//!
//! # Design Decisions
//! - One spawned task per target per tick, so a tick's latency is bounded
//!   by the slowest single probe timeout, not the sum of all probes
//! - Probe errors and timeouts are converted to failure observations and
//!   never escape this module

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::join_all;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::HealthCheckConfig;
use crate::health::store::HealthStore;
use crate::target::Target;

pub struct HealthMonitor {
    targets: Arc<Vec<Arc<Target>>>,
    store: Arc<HealthStore>,
    config: HealthCheckConfig,
}

impl HealthMonitor {
    pub fn new(
        targets: Arc<Vec<Arc<Target>>>,
        store: Arc<HealthStore>,
        config: HealthCheckConfig,
    ) -> Self {
        Self {
            targets,
            store,
            config,
        }
    }

    /// Run the probe loop until the shutdown signal fires.
    ///
    /// This is a forever-running background activity; it only exits on
    /// shutdown. In-flight probes at shutdown finish within one probe
    /// timeout and their results are discarded with the store.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_ms = self.config.probe_interval_ms,
            timeout_ms = self.config.probe_timeout_ms,
            targets = self.targets.len(),
            "Health monitor starting"
        );

        let mut ticker = time::interval(Duration::from_millis(self.config.probe_interval_ms));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.check_all().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Health monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// Probe every target concurrently and wait for the tick to complete.
    async fn check_all(&self) {
        let timeout = Duration::from_millis(self.config.probe_timeout_ms);

        let handles: Vec<_> = self
            .targets
            .iter()
            .map(|target| {
                let target = target.clone();
                let store = self.store.clone();
                tokio::spawn(async move {
                    Self::check_one(&target, &store, timeout).await;
                })
            })
            .collect();

        join_all(handles).await;
    }

    /// Probe a single target and commit the result.
    async fn check_one(target: &Target, store: &HealthStore, timeout: Duration) {
        let alive = match time::timeout(timeout, target.probe().check_alive()).await {
            Ok(Ok(true)) => true,
            Ok(Ok(false)) => {
                tracing::warn!(target_id = %target.id, "Probe reported target not alive");
                false
            }
            Ok(Err(e)) => {
                tracing::warn!(target_id = %target.id, error = %e, "Probe failed");
                false
            }
            Err(_) => {
                tracing::warn!(target_id = %target.id, "Probe timed out");
                false
            }
        };

        // Only fails for an unregistered id, which cannot happen here: the
        // store and target list are built from the same registration.
        if let Err(e) = store.record_probe(&target.id, alive, Instant::now()) {
            tracing::error!(target_id = %target.id, error = %e, "Failed to commit probe result");
        }
    }
}
