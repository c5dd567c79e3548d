//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check id uniqueness and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::fmt;

use crate::config::schema::RouterConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoTargets,
    EmptyTargetId,
    DuplicateTargetId(String),
    ZeroProbeInterval,
    ZeroProbeTimeout,
    ZeroUnhealthyThreshold,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoTargets => write!(f, "at least one target must be configured"),
            ValidationError::EmptyTargetId => write!(f, "target id must not be empty"),
            ValidationError::DuplicateTargetId(id) => {
                write!(f, "duplicate target id: {}", id)
            }
            ValidationError::ZeroProbeInterval => {
                write!(f, "probe_interval_ms must be greater than zero")
            }
            ValidationError::ZeroProbeTimeout => {
                write!(f, "probe_timeout_ms must be greater than zero")
            }
            ValidationError::ZeroUnhealthyThreshold => {
                write!(f, "unhealthy_threshold must be at least 1")
            }
        }
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.targets.is_empty() {
        errors.push(ValidationError::NoTargets);
    }

    let mut seen = HashSet::new();
    for target in &config.targets {
        if target.id.is_empty() {
            errors.push(ValidationError::EmptyTargetId);
        } else if !seen.insert(target.id.as_str()) {
            errors.push(ValidationError::DuplicateTargetId(target.id.clone()));
        }
    }

    if config.health_check.probe_interval_ms == 0 {
        errors.push(ValidationError::ZeroProbeInterval);
    }
    if config.health_check.probe_timeout_ms == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }
    if config.health_check.unhealthy_threshold == 0 {
        errors.push(ValidationError::ZeroUnhealthyThreshold);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
