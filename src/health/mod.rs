//! Health tracking subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduled probes (prober.rs):
//!     Periodic timer
//!     → check_alive() on every target, concurrently, with timeout
//!     → record_probe() on store.rs
//!
//! Eager outcome reports (facade):
//!     Caller observed a request failure
//!     → mark_unhealthy() on store.rs, no waiting for the next tick
//!
//! State machine (store.rs):
//!     Healthy → Unhealthy: consecutive probe failures >= threshold,
//!                          or one eager failure report
//!     Unhealthy → Healthy: one successful probe
//! ```
//!
//! # Design Decisions
//! - Asymmetric transitions: slow to evict (threshold), fast to reinstate
//!   (single success), mirroring the trust placed in a successful reconnect
//! - Probe failures are contained here; they never propagate to callers
//! - Routing reads are snapshots and may lag one probe interval

pub mod prober;
pub mod store;

pub use prober::HealthMonitor;
pub use store::{HealthRecord, HealthStore};
