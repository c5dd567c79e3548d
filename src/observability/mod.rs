//! Observability helpers.
//!
//! The crate itself only emits `tracing` events; this module gives the
//! embedding application a one-call subscriber setup matching how the
//! router's structured fields are meant to be read.

pub mod logging;

pub use logging::init_logging;
