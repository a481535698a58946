//! The actor that owns the order ledger.
//!
//! All ledger mutation flows through one task draining one channel, so
//! requests are serialized without any locking: the actor model gives the
//! single-conversation-at-a-time guarantee the ledger needs. Clients talk to
//! the actor through [`crate::clients::LedgerClient`].

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::catalog::MenuItem;
use crate::clients::LedgerClient;
use crate::ledger::{Ledger, LedgerError, Order, OrderSummary};

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, LedgerError>>;

/// Requests understood by the ledger actor.
///
/// Each variant carries a `respond_to` sender; the actor answers every
/// request exactly once (a dropped receiver on the client side is ignored).
#[derive(Debug)]
pub enum LedgerRequest {
    /// Append an order for an already-resolved menu item.
    Place {
        item: MenuItem,
        special_request: String,
        respond_to: Response<Order>,
    },
    /// Switch the most recent order to delivery at the given address.
    SetDeliveryAddress {
        address: String,
        respond_to: Response<()>,
    },
    /// Itemized list plus running total.
    Summary { respond_to: Response<OrderSummary> },
    /// One status line per order, including fulfillment state.
    StatusReport { respond_to: Response<Vec<String>> },
    /// Discard all orders.
    Reset { respond_to: Response<()> },
}

/// The server half of the ledger: owns the state and the receiver.
///
/// Reads (`Summary`, `StatusReport`) never mutate; `Place` appends exactly
/// one order or nothing. Run it with [`LedgerActor::run`] inside a spawned
/// task.
pub struct LedgerActor {
    receiver: mpsc::Receiver<LedgerRequest>,
    ledger: Ledger,
}

impl LedgerActor {
    pub fn new(buffer_size: usize) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            ledger: Ledger::new(),
        };
        (actor, LedgerClient::new(sender))
    }

    /// Runs the actor's event loop, processing requests until the channel
    /// closes (all clients dropped).
    pub async fn run(mut self) {
        info!("Ledger actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::Place {
                    item,
                    special_request,
                    respond_to,
                } => {
                    debug!(item = %item.name, special_request = %special_request, "Place");
                    let order = self.ledger.place(&item, &special_request);
                    info!(order_id = order.id, size = self.ledger.len(), "Order placed");
                    let _ = respond_to.send(Ok(order));
                }
                LedgerRequest::SetDeliveryAddress {
                    address,
                    respond_to,
                } => {
                    debug!(address = %address, "SetDeliveryAddress");
                    match self.ledger.set_delivery_address(&address) {
                        Ok(()) => {
                            info!(size = self.ledger.len(), "Delivery address recorded");
                            let _ = respond_to.send(Ok(()));
                        }
                        Err(e) => {
                            warn!(error = %e, "Delivery update failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                LedgerRequest::Summary { respond_to } => {
                    debug!(size = self.ledger.len(), "Summary");
                    let _ = respond_to.send(Ok(self.ledger.summary()));
                }
                LedgerRequest::StatusReport { respond_to } => {
                    debug!(size = self.ledger.len(), "StatusReport");
                    let _ = respond_to.send(Ok(self.ledger.status_report()));
                }
                LedgerRequest::Reset { respond_to } => {
                    info!(discarded = self.ledger.len(), "Ledger reset");
                    self.ledger.reset();
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(size = self.ledger.len(), "Ledger actor shutdown");
    }
}
