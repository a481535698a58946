//! One action per intent.
//!
//! Each action owns the exact message contract for its intent. Recoverable
//! conditions (missing entity, item not on the menu, no active order) end
//! the turn with a clarification message and no ledger mutation; only
//! actor-channel failures propagate as errors.

use async_trait::async_trait;
use tracing::debug;

use crate::dialogue::{
    TurnContext, TurnRequest, ENTITY_DAY, ENTITY_DELIVERY_ADDRESS, ENTITY_ITEM,
    ENTITY_SPECIAL_REQUIREMENT,
};
use crate::ledger::LedgerError;

/// A handler for one intent.
///
/// `run` receives the turn and the shared [`TurnContext`] and returns the
/// messages to send, in order. Implementations must leave the ledger
/// untouched on every non-success path.
#[async_trait]
pub trait TurnAction: Send + Sync {
    /// The intent this action handles.
    fn name(&self) -> &'static str;

    async fn run(&self, turn: &TurnRequest, ctx: &TurnContext)
        -> Result<Vec<String>, LedgerError>;
}

/// The full action set, one per supported intent.
pub fn default_actions() -> Vec<Box<dyn TurnAction>> {
    vec![
        Box::new(RespondGreeting),
        Box::new(RespondOpeningHours),
        Box::new(ListMenuItems),
        Box::new(ProcessOrder),
        Box::new(ConfirmDeliveryAddress),
        Box::new(GetOrderedMeals),
        Box::new(RespondGoodbye),
    ]
}

/// `greet`: static welcome message.
pub struct RespondGreeting;

#[async_trait]
impl TurnAction for RespondGreeting {
    fn name(&self) -> &'static str {
        "greet"
    }

    async fn run(
        &self,
        _turn: &TurnRequest,
        _ctx: &TurnContext,
    ) -> Result<Vec<String>, LedgerError> {
        Ok(vec![
            "Hello! Welcome to our restaurant. How can I help you?".to_string(),
        ])
    }
}

/// `opening_hours`: looks the requested day up in the reference data.
pub struct RespondOpeningHours;

#[async_trait]
impl TurnAction for RespondOpeningHours {
    fn name(&self) -> &'static str {
        "opening_hours"
    }

    async fn run(
        &self,
        turn: &TurnRequest,
        ctx: &TurnContext,
    ) -> Result<Vec<String>, LedgerError> {
        let message = match turn
            .first_entity_value(ENTITY_DAY)
            .and_then(|day| ctx.hours.for_day(day).map(|hours| (day, hours)))
        {
            Some((day, hours)) => format!(
                "The restaurant is open on {day} from {} to {}.",
                hours.open, hours.close
            ),
            None => "I'm sorry, I couldn't find the opening hours for that day.".to_string(),
        };
        Ok(vec![message])
    }
}

/// `list_menu`: one line per catalog item.
pub struct ListMenuItems;

#[async_trait]
impl TurnAction for ListMenuItems {
    fn name(&self) -> &'static str {
        "list_menu"
    }

    async fn run(
        &self,
        _turn: &TurnRequest,
        ctx: &TurnContext,
    ) -> Result<Vec<String>, LedgerError> {
        if ctx.catalog.is_empty() {
            return Ok(vec![
                "I'm sorry, the menu is currently unavailable.".to_string()
            ]);
        }
        let mut message = String::from("Here are our menu items:\n");
        for item in ctx.catalog.items() {
            message.push_str(&format!("{} for {} USD\n", item.name, item.price));
        }
        Ok(vec![message])
    }
}

/// `order`: resolves the item against the catalog and appends to the
/// ledger.
pub struct ProcessOrder;

#[async_trait]
impl TurnAction for ProcessOrder {
    fn name(&self) -> &'static str {
        "order"
    }

    async fn run(
        &self,
        turn: &TurnRequest,
        ctx: &TurnContext,
    ) -> Result<Vec<String>, LedgerError> {
        let Some(item_name) = turn.first_entity_value(ENTITY_ITEM) else {
            return Ok(vec!["I didn't understand what you say.".to_string()]);
        };

        let Some(item) = ctx.catalog.resolve(item_name) else {
            // Echoes the raw input, not a canonical name we never found.
            return Ok(vec![format!("We currently not selling {item_name}")]);
        };

        let special_request = turn
            .first_entity_value(ENTITY_SPECIAL_REQUIREMENT)
            .unwrap_or("");

        let order = ctx
            .ledger
            .place(item.clone(), special_request.to_string())
            .await?;
        debug!(order_id = order.id, "Order appended");

        let summary = ctx.ledger.summary().await?;
        let mut message = String::from("Your order has been placed. You order: ");
        for line in &summary.lines {
            message.push_str(line);
            message.push('\n');
        }
        message.push_str(&format!("Your total price is {} USD\n", summary.total_price));
        message.push_str("Would you like to provide your delivery address?");
        Ok(vec![message])
    }
}

/// `delivery_address`: switches the latest order to delivery.
pub struct ConfirmDeliveryAddress;

#[async_trait]
impl TurnAction for ConfirmDeliveryAddress {
    fn name(&self) -> &'static str {
        "delivery_address"
    }

    async fn run(
        &self,
        turn: &TurnRequest,
        ctx: &TurnContext,
    ) -> Result<Vec<String>, LedgerError> {
        let Some(address) = turn.first_entity_value(ENTITY_DELIVERY_ADDRESS) else {
            return Ok(vec!["We are waiting for you in restaurant!".to_string()]);
        };

        match ctx.ledger.set_delivery_address(address.to_string()).await {
            Ok(()) => Ok(vec![format!(
                "Thank you! Your delivery will be sent to {address}."
            )]),
            Err(LedgerError::NoActiveOrder) => {
                Ok(vec!["You have not placed any order yet.".to_string()])
            }
            Err(e) => Err(e),
        }
    }
}

/// `order_status`: renders the full status report.
pub struct GetOrderedMeals;

#[async_trait]
impl TurnAction for GetOrderedMeals {
    fn name(&self) -> &'static str {
        "order_status"
    }

    async fn run(
        &self,
        _turn: &TurnRequest,
        ctx: &TurnContext,
    ) -> Result<Vec<String>, LedgerError> {
        let report = ctx.ledger.status_report().await?;
        let mut message = String::from("Your orders:\n");
        for line in &report {
            message.push_str(line);
            message.push('\n');
        }
        Ok(vec![message])
    }
}

/// `goodbye`: resets the ledger and closes the conversation.
pub struct RespondGoodbye;

#[async_trait]
impl TurnAction for RespondGoodbye {
    fn name(&self) -> &'static str {
        "goodbye"
    }

    async fn run(
        &self,
        _turn: &TurnRequest,
        ctx: &TurnContext,
    ) -> Result<Vec<String>, LedgerError> {
        ctx.ledger.reset().await?;
        Ok(vec!["Goodbye! See you again!".to_string()])
    }
}
