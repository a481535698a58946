//! The order ledger: state, actor, and errors.
//!
//! [`Ledger`] holds the pure state and invariants; [`LedgerActor`] wraps it
//! in a message loop so all mutation is serialized through one task.

pub mod actor;
pub mod error;
pub mod mock;
pub mod order;

pub use actor::*;
pub use error::*;
pub use order::*;

use crate::clients::LedgerClient;

/// Channel capacity for the ledger actor. Turns are handled one at a time,
/// so a small buffer is plenty.
const LEDGER_BUFFER_SIZE: usize = 32;

/// Creates a new ledger actor and its client.
pub fn new() -> (LedgerActor, LedgerClient) {
    LedgerActor::new(LEDGER_BUFFER_SIZE)
}
