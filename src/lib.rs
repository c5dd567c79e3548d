//! Health-Aware Target Router
//!
//! A routing core that spreads requests across multiple equivalent backend
//! targets, continuously probes their liveness in the background, and
//! transparently removes and reinstates them from the rotation.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │                TARGET ROUTER                 │
//!                  │                                              │
//!   route_request  │  ┌──────────────┐      ┌──────────────┐     │
//!   ───────────────┼─▶│ TargetRouter │─────▶│  RoundRobin  │     │
//!                  │  │   (facade)   │      │  (selector)  │     │
//!   report_outcome │  └──────┬───────┘      └──────┬───────┘     │
//!   ───────────────┼────────▶│                     │ reads       │
//!                  │         ▼                     ▼             │
//!                  │  ┌─────────────────────────────────┐        │
//!                  │  │          HealthStore            │        │
//!                  │  │   (per-target health records)   │        │
//!                  │  └─────────────────▲───────────────┘        │
//!                  │                    │ writes                 │
//!                  │           ┌────────┴────────┐               │
//!                  │           │  HealthMonitor  │◀── interval   │
//!                  │           │ (probe fan-out) │    timer      │
//!                  │           └────────┬────────┘               │
//!                  └────────────────────┼────────────────────────┘
//!                                       │ check_alive()
//!                                       ▼
//!                             backend targets (opaque)
//! ```
//!
//! The router never performs the caller's I/O: `route_request` hands back an
//! opaque [`Target`] handle and the caller runs its own query/transfer
//! against it, optionally feeding the result back via `report_outcome`.

// Core subsystems
pub mod config;
pub mod routing;
pub mod target;

// Health tracking
pub mod health;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::{HealthCheckConfig, RouterConfig};
pub use error::{RouterError, RouterResult};
pub use health::store::HealthRecord;
pub use lifecycle::Shutdown;
pub use routing::TargetRouter;
pub use target::{Probe, Target, TargetId};
