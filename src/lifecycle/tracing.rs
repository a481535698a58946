//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the whole backend.
//!
//! The format is compact and hides module paths (`with_target(false)`);
//! structured fields like `order_id`, `size`, and `intent` carry the
//! context instead. Levels are configured via `RUST_LOG`:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full request payloads at the actor and client boundaries
//! RUST_LOG=debug cargo run
//! ```
//!
//! What gets traced:
//! - **Actor lifecycle**: startup, shutdown, and final ledger size.
//! - **Ledger operations**: placements, delivery updates, resets, with
//!   structured fields.
//! - **Turn flow**: one span per dispatched turn, keyed by intent.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
