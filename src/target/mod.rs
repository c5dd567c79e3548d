//! Target abstraction.
//!
//! # Responsibilities
//! - Represent a single backend target (id + opaque connection params)
//! - Carry the liveness probe capability supplied by the caller
//!
//! # Design Decisions
//! - Targets are immutable after registration; identity is the id
//! - The probe is the only operation the core ever invokes on a target;
//!   the caller's actual I/O happens outside the router

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

/// Target identifier for strong typing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(Arc<str>);

impl TargetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self(Arc::from(id))
    }
}

impl From<String> for TargetId {
    fn from(id: String) -> Self {
        Self(Arc::from(id.as_str()))
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Liveness probe supplied with each target.
///
/// `check_alive` returns `Ok(true)` when the target answered, `Ok(false)` or
/// `Err(_)` when it did not. The prober bounds each call with a timeout, so
/// implementations may block on I/O freely. The probe must have no side
/// effects beyond the remote check itself.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn check_alive(&self) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

/// A single routable backend target.
pub struct Target {
    /// Unique identifier, fixed at registration.
    pub id: TargetId,

    /// Opaque connection parameters for the caller's own I/O
    /// (e.g. DSN fragments, host/port). The core never interprets them.
    pub params: HashMap<String, String>,

    probe: Arc<dyn Probe>,
}

impl Target {
    /// Create a new target with the given id and probe.
    pub fn new(id: impl Into<TargetId>, probe: Arc<dyn Probe>) -> Self {
        Self {
            id: id.into(),
            params: HashMap::new(),
            probe,
        }
    }

    /// Attach opaque connection parameters.
    pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    /// The liveness probe for this target.
    pub fn probe(&self) -> &Arc<dyn Probe> {
        &self.probe
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("id", &self.id)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
