//! Lifecycle management.
//!
//! The prober is the only long-running task in this crate; shutdown is a
//! broadcast it subscribes to. Ordered startup belongs to the embedding
//! application.

pub mod shutdown;

pub use shutdown::Shutdown;
