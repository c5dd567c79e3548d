//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! route_request()
//!     → router.rs (facade)
//!     → HealthStore::healthy_ids() snapshot
//!     → round_robin.rs (advance cursor, index into snapshot)
//!     → Return: Arc<Target> or NoHealthyTarget
//! ```
//!
//! # Design Decisions
//! - Selection reads a snapshot; it never blocks on the prober
//! - Cursor is a single atomic, wrapped modulo the live healthy-set size
//! - Ties broken by registration order, so selection is deterministic and
//!   testable while the healthy set is stable
//! - Empty healthy set fails strictly; no designated-primary fallback

pub mod round_robin;
pub mod router;

pub use round_robin::RoundRobin;
pub use router::TargetRouter;
