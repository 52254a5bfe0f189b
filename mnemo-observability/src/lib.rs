//! # mnemo-observability
//!
//! Structured tracing for the workspace: subscriber initialisation, span
//! macros per operation, and named events for key milestones.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
