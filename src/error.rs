//! Error taxonomy for the routing core.

use thiserror::Error;

use crate::target::TargetId;

/// Errors surfaced by the routing core.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Every registered target is currently unhealthy. Surfaced to the
    /// caller unchanged; retry policy belongs to the caller.
    #[error("no healthy target available")]
    NoHealthyTarget,

    /// A target id was referenced that was never registered. Programming
    /// error, not retried.
    #[error("unknown target id: {0}")]
    InvalidTarget(TargetId),

    /// Two targets were registered under the same id.
    #[error("duplicate target id: {0}")]
    DuplicateTarget(TargetId),

    /// A router was constructed with no targets at all.
    #[error("no targets registered")]
    EmptyRegistry,
}

/// Result type for routing operations.
pub type RouterResult<T> = Result<T, RouterError>;
