//! Client for interacting with the ledger actor.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::catalog::MenuItem;
use crate::ledger::{LedgerError, LedgerRequest, Order, OrderSummary};

/// A type-safe client for the ledger actor.
///
/// Cheap to clone; every clone talks to the same actor. Channel failures are
/// mapped to [`LedgerError::ActorClosed`] (actor gone) and
/// [`LedgerError::ActorDropped`] (response channel dropped).
#[derive(Clone)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    /// Appends an order for an already-resolved menu item. Returns the new
    /// order as stored.
    #[instrument(skip(self, item), fields(item = %item.name))]
    pub async fn place(
        &self,
        item: MenuItem,
        special_request: String,
    ) -> Result<Order, LedgerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Place {
                item,
                special_request,
                respond_to,
            })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    /// Switches the most recent order to delivery. Fails with
    /// [`LedgerError::NoActiveOrder`] when nothing has been placed yet.
    #[instrument(skip(self))]
    pub async fn set_delivery_address(&self, address: String) -> Result<(), LedgerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::SetDeliveryAddress {
                address,
                respond_to,
            })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    /// Itemized list of all orders plus the running total.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<OrderSummary, LedgerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Summary { respond_to })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    /// One status line per order, including fulfillment state.
    #[instrument(skip(self))]
    pub async fn status_report(&self) -> Result<Vec<String>, LedgerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::StatusReport { respond_to })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }

    /// Discards all orders.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), LedgerError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(LedgerRequest::Reset { respond_to })
            .await
            .map_err(|_| LedgerError::ActorClosed)?;
        response.await.map_err(|_| LedgerError::ActorDropped)?
    }
}
