//! Shared probe doubles for integration testing.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use target_router::{Probe, Target};

/// Probe that reports whatever the switch currently says, counting calls.
pub struct SwitchProbe {
    up: Arc<AtomicBool>,
    calls: Arc<AtomicU32>,
}

#[async_trait]
impl Probe for SwitchProbe {
    async fn check_alive(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.up.load(Ordering::SeqCst))
    }
}

/// Probe that answers instantly while up, and hangs past any reasonable
/// timeout while down. Models an unreachable endpoint rather than one that
/// answers "no".
pub struct SlowWhenDownProbe {
    up: Arc<AtomicBool>,
}

#[async_trait]
impl Probe for SlowWhenDownProbe {
    async fn check_alive(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        if self.up.load(Ordering::SeqCst) {
            Ok(true)
        } else {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(true)
        }
    }
}

/// Build a target whose probe follows a switch. Returns the flip handle and
/// the probe call counter.
#[allow(dead_code)]
pub fn switched_target(id: &str) -> (Target, Arc<AtomicBool>, Arc<AtomicU32>) {
    let up = Arc::new(AtomicBool::new(true));
    let calls = Arc::new(AtomicU32::new(0));
    let target = Target::new(
        id,
        Arc::new(SwitchProbe {
            up: up.clone(),
            calls: calls.clone(),
        }),
    );
    (target, up, calls)
}

/// Build a target whose probe times out while the switch is down.
#[allow(dead_code)]
pub fn timing_out_target(id: &str) -> (Target, Arc<AtomicBool>) {
    let up = Arc::new(AtomicBool::new(true));
    let target = Target::new(id, Arc::new(SlowWhenDownProbe { up: up.clone() }));
    (target, up)
}
