//! Orchestration: actor startup, wiring, shutdown, and tracing setup.

pub mod dialogue_system;
pub mod tracing;

pub use dialogue_system::*;
