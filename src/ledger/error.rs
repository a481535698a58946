//! Error types for the order ledger.

use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A delivery-address update was attempted against an empty ledger.
    /// There is no order to target; the caller must not assume one exists.
    #[error("no active order to update")]
    NoActiveOrder,

    /// The ledger actor's channel is closed (actor stopped or shutting down).
    #[error("ledger actor closed")]
    ActorClosed,

    /// The ledger actor dropped the response channel without answering.
    #[error("ledger actor dropped response channel")]
    ActorDropped,
}
