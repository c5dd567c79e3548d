//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → caller builds Targets (id + params + its own Probe)
//!     → TargetRouter::new(targets, config.health_check)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the target set is fixed for the
//!   router's lifetime, so there is no reload path
//! - All health-check fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{HealthCheckConfig, RouterConfig, TargetConfig};
