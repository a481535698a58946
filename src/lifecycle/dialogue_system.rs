use std::sync::Arc;

use tracing::{error, info};

use crate::catalog::{MenuCatalog, OpeningHours};
use crate::clients::LedgerClient;
use crate::dialogue::{DispatchError, Dispatcher, TurnContext, TurnRequest};

/// The runtime orchestrator for one conversation.
///
/// `DialogueSystem` is responsible for:
/// - **Lifecycle management**: spawning the ledger actor and shutting it
///   down gracefully.
/// - **Dependency wiring**: handing the catalog, opening hours, and ledger
///   client to the dispatcher.
///
/// One system corresponds to one conversation/session: its ledger actor owns
/// that conversation's order history and serializes all mutation. A
/// multi-tenant host creates one `DialogueSystem` per session id.
///
/// # Example
///
/// ```ignore
/// let system = DialogueSystem::new(catalog, hours);
/// let replies = system.handle_turn(&turn).await?;
/// system.shutdown().await?;
/// ```
pub struct DialogueSystem {
    /// Client for the conversation's ledger actor. Exposed so hosts and
    /// tests can inspect ledger state directly.
    pub ledger_client: LedgerClient,

    dispatcher: Dispatcher,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DialogueSystem {
    /// Spawns the ledger actor and wires up the dispatcher.
    ///
    /// The reference data arrives finished and validated; loading it from
    /// files is the caller's concern (see [`crate::data`]) and happens
    /// before any turn is processed.
    pub fn new(catalog: MenuCatalog, hours: OpeningHours) -> Self {
        let (ledger_actor, ledger_client) = crate::ledger::new();
        let ledger_handle = tokio::spawn(ledger_actor.run());

        let dispatcher = Dispatcher::new(TurnContext {
            catalog: Arc::new(catalog),
            hours: Arc::new(hours),
            ledger: ledger_client.clone(),
        });

        Self {
            ledger_client,
            dispatcher,
            handles: vec![ledger_handle],
        }
    }

    /// Handles one conversation turn to completion.
    pub async fn handle_turn(&self, turn: &TurnRequest) -> Result<Vec<String>, DispatchError> {
        self.dispatcher.handle_turn(turn).await
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the dispatcher and the ledger client closes the actor's
    /// channel; the actor drains what is queued and exits its loop. Any
    /// panicked actor task surfaces as an error here.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dialogue system...");

        drop(self.dispatcher);
        drop(self.ledger_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Dialogue system shutdown complete.");
        Ok(())
    }
}
