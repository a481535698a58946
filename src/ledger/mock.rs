//! Utilities for testing ledger clients in isolation.
//!
//! # Testing Strategy
//! When a test only cares about *client-side* logic (e.g. a dialogue action
//! building a message), spinning up a full [`crate::ledger::LedgerActor`] is
//! unnecessary. `create_mock_client` hands out a [`LedgerClient`] whose
//! requests arrive on a receiver the test controls, so the test can assert
//! the exact request and script the response deterministically.

use tokio::sync::mpsc;

use crate::catalog::MenuItem;
use crate::clients::LedgerClient;
use crate::ledger::{LedgerRequest, Order, Response};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Helper to verify that the next request is a `Place`.
pub async fn expect_place(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(MenuItem, String, Response<Order>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Place {
            item,
            special_request,
            respond_to,
        }) => Some((item, special_request, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a `SetDeliveryAddress`.
pub async fn expect_set_delivery_address(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(String, Response<()>)> {
    match receiver.recv().await {
        Some(LedgerRequest::SetDeliveryAddress {
            address,
            respond_to,
        }) => Some((address, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Fulfillment, LedgerError};
    use chrono::Utc;

    #[tokio::test]
    async fn mock_client_round_trip() {
        let (client, mut receiver) = create_mock_client(10);

        let place_task = tokio::spawn(async move {
            client
                .place(MenuItem::new("Pizza", 10.0, 1), "extra cheese".to_string())
                .await
        });

        let (item, special_request, responder) =
            expect_place(&mut receiver).await.expect("Expected Place");
        assert_eq!(item.name, "Pizza");
        assert_eq!(special_request, "extra cheese");

        let order = Order {
            id: 0,
            name: item.name.clone(),
            price: item.price,
            preparation_time: item.preparation_time,
            ready_at: Utc::now(),
            special_request,
            fulfillment: Fulfillment::Pickup,
        };
        responder.send(Ok(order.clone())).unwrap();

        let result = place_task.await.unwrap();
        assert_eq!(result, Ok(order));
    }

    #[tokio::test]
    async fn mock_client_scripted_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move {
            client.set_delivery_address("1 Main St".to_string()).await
        });

        let (address, responder) = expect_set_delivery_address(&mut receiver)
            .await
            .expect("Expected SetDeliveryAddress");
        assert_eq!(address, "1 Main St");
        responder.send(Err(LedgerError::NoActiveOrder)).unwrap();

        assert_eq!(task.await.unwrap(), Err(LedgerError::NoActiveOrder));
    }
}
