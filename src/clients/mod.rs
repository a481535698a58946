//! Typed clients that hide raw message passing from the rest of the app.

pub mod ledger_client;

pub use ledger_client::*;
