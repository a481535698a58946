//! Immutable reference data: the menu catalog and opening hours.
//!
//! Everything in this module is loaded once at startup and never mutated
//! afterwards. Lookups are pure functions with no side effects, so the
//! catalog can be shared freely (e.g. behind an `Arc`) across handlers.

pub mod distance;
pub mod hours;
pub mod menu;

pub use hours::*;
pub use menu::*;
