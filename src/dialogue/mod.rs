//! The turn layer: structured requests in, plain-text messages out.
//!
//! A [`TurnRequest`] is what the upstream NLU collaborator hands us: an
//! intent name plus the entities it extracted. The [`Dispatcher`] routes the
//! intent to the matching [`actions::TurnAction`], which renders the reply.
//! This crate never parses or validates free text itself; entity values
//! arrive pre-extracted and may be absent, malformed, or unmatched.

pub mod actions;

use std::sync::Arc;

use thiserror::Error;
use tracing::{instrument, warn};

use crate::catalog::{MenuCatalog, OpeningHours};
use crate::clients::LedgerClient;
use crate::dialogue::actions::{default_actions, TurnAction};
use crate::ledger::LedgerError;

/// Entity type carrying the ordered item name.
pub const ENTITY_ITEM: &str = "item";
/// Entity type carrying free-text special requests.
pub const ENTITY_SPECIAL_REQUIREMENT: &str = "special_requirement";
/// Entity type carrying a delivery address.
pub const ENTITY_DELIVERY_ADDRESS: &str = "delivery_address";
/// Entity type carrying a day name for opening-hours queries.
pub const ENTITY_DAY: &str = "day";

/// A named, typed value extracted from user text by the NLU layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub entity: String,
    pub value: String,
}

impl Entity {
    pub fn new(entity: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            value: value.into(),
        }
    }
}

/// One conversation turn as classified upstream.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub intent: String,
    pub entities: Vec<Entity>,
}

impl TurnRequest {
    pub fn new(intent: impl Into<String>, entities: Vec<Entity>) -> Self {
        Self {
            intent: intent.into(),
            entities,
        }
    }

    /// First value of the given entity type, if any. Duplicate entities of
    /// one type can appear in a turn; the first occurrence wins.
    pub fn first_entity_value(&self, entity_type: &str) -> Option<&str> {
        self.entities
            .iter()
            .find(|entity| entity.entity == entity_type)
            .map(|entity| entity.value.as_str())
    }
}

/// Shared read-only dependencies injected into every action.
#[derive(Clone)]
pub struct TurnContext {
    pub catalog: Arc<MenuCatalog>,
    pub hours: Arc<OpeningHours>,
    pub ledger: LedgerClient,
}

/// Errors surfaced by the dispatcher.
///
/// Domain-level conditions (missing entity, unknown menu item, no active
/// order) are recovered inside actions as clarification messages; what is
/// left here is infrastructure: an intent nobody handles, or the ledger
/// actor being gone.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no action registered for intent: {0}")]
    UnknownIntent(String),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Routes turns to actions.
pub struct Dispatcher {
    actions: Vec<Box<dyn TurnAction>>,
    ctx: TurnContext,
}

impl Dispatcher {
    pub fn new(ctx: TurnContext) -> Self {
        Self {
            actions: default_actions(),
            ctx,
        }
    }

    /// Handles one turn to completion: finds the action registered for the
    /// intent and returns the messages it produced, in order.
    #[instrument(skip(self, turn), fields(intent = %turn.intent))]
    pub async fn handle_turn(&self, turn: &TurnRequest) -> Result<Vec<String>, DispatchError> {
        match self
            .actions
            .iter()
            .find(|action| action.name() == turn.intent)
        {
            Some(action) => Ok(action.run(turn, &self.ctx).await?),
            None => {
                warn!("No action registered");
                Err(DispatchError::UnknownIntent(turn.intent.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entity_value_takes_first_occurrence() {
        let turn = TurnRequest::new(
            "order",
            vec![
                Entity::new(ENTITY_ITEM, "Pizza"),
                Entity::new(ENTITY_ITEM, "Salad"),
                Entity::new(ENTITY_SPECIAL_REQUIREMENT, "no onions"),
            ],
        );

        assert_eq!(turn.first_entity_value(ENTITY_ITEM), Some("Pizza"));
        assert_eq!(
            turn.first_entity_value(ENTITY_SPECIAL_REQUIREMENT),
            Some("no onions")
        );
        assert_eq!(turn.first_entity_value(ENTITY_DAY), None);
    }
}
