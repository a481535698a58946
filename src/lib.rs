//! # Dinebot
//!
//! > **A restaurant-assistant dialogue backend, built on message-passing actors.**
//!
//! Dinebot sits behind an NLU layer: it receives structured turns
//! (`{intent, entities}`), resolves free-text item names against a menu
//! catalog, maintains an order ledger for the conversation, and answers with
//! plain-text messages.
//!
//! ## Architecture Notes
//!
//! ### 1. Actor-owned state
//! The order ledger is the only mutable state in the system. It lives inside
//! [`ledger::LedgerActor`], which processes requests sequentially from an mpsc
//! channel, with no locks and no shared globals. One [`lifecycle::DialogueSystem`]
//! (one ledger actor) corresponds to one conversation; multi-tenant hosts
//! spawn one system per session id.
//!
//! ### 2. Pure reference data
//! [`catalog::MenuCatalog`] and [`catalog::OpeningHours`] are immutable after
//! startup. Resolution (exact match, then fuzzy match under an edit-distance
//! threshold) is a pure function of catalog + input. The core performs no
//! I/O; [`data`] parses the reference files once, outside the turn path.
//!
//! ### 3. Type-safe error handling
//! Each module defines its own error type with `thiserror`
//! ([`ledger::LedgerError`], [`data::DataError`], [`dialogue::DispatchError`]).
//! Entity-missing and item-not-found conditions are recovered *inside* a turn
//! as clarification messages: a failed turn never mutates the ledger.
//!
//! ### 4. Observability
//! `tracing` with structured fields everywhere. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`catalog`]: menu items, opening hours, fuzzy name resolution.
//! - [`ledger`]: the order ledger state and its actor.
//! - [`clients`]: the typed [`clients::LedgerClient`] hiding raw message passing.
//! - [`dialogue`]: per-intent turn actions and the dispatcher.
//! - [`data`]: serde parsing of the startup reference data.
//! - [`lifecycle`]: orchestration ([`lifecycle::DialogueSystem`]) and tracing setup.
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the scripted demo conversation with info logs
//! RUST_LOG=info cargo run
//! ```

pub mod catalog;
pub mod clients;
pub mod data;
pub mod dialogue;
pub mod ledger;
pub mod lifecycle;
