//! Scripted demo conversation for the dinebot backend.
//!
//! Parses the embedded reference data, spins up a [`DialogueSystem`], and
//! plays through a typical conversation: hours query, menu listing, two
//! orders (one fuzzy-matched, one misspelled beyond recognition), a delivery
//! address, a status query, and goodbye.

use dinebot::dialogue::{Entity, TurnRequest};
use dinebot::lifecycle::tracing::setup_tracing;
use dinebot::lifecycle::DialogueSystem;
use tracing::{info, Instrument};

const MENU_JSON: &str = r#"{
    "items": [
        {"name": "Pizza", "price": 10, "preparation_time": 1},
        {"name": "Salad", "price": 6, "preparation_time": 0},
        {"name": "Burger", "price": 8.5, "preparation_time": 1},
        {"name": "Cola", "price": 2, "preparation_time": 0}
    ]
}"#;

const HOURS_JSON: &str = r#"{
    "items": {
        "Monday": {"open": "09:00", "close": "22:00"},
        "Tuesday": {"open": "09:00", "close": "22:00"},
        "Wednesday": {"open": "09:00", "close": "22:00"},
        "Thursday": {"open": "09:00", "close": "22:00"},
        "Friday": {"open": "09:00", "close": "23:30"},
        "Saturday": {"open": "11:00", "close": "23:30"},
        "Sunday": {"open": "11:00", "close": "21:00"}
    }
}"#;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting dinebot demo conversation");

    // Reference data is loaded once, before any turn is processed.
    let catalog = dinebot::data::parse_menu(MENU_JSON).map_err(|e| e.to_string())?;
    let hours = dinebot::data::parse_opening_hours(HOURS_JSON).map_err(|e| e.to_string())?;

    let system = DialogueSystem::new(catalog, hours);

    let script = vec![
        TurnRequest::new("greet", vec![]),
        TurnRequest::new("opening_hours", vec![Entity::new("day", "Friday")]),
        TurnRequest::new("list_menu", vec![]),
        TurnRequest::new(
            "order",
            vec![
                // Misspelled on purpose; the fuzzy pass resolves it.
                Entity::new("item", "piza"),
                Entity::new("special_requirement", "extra cheese"),
            ],
        ),
        TurnRequest::new("order", vec![Entity::new("item", "xyzzy")]),
        TurnRequest::new("order", vec![Entity::new("item", "Cola")]),
        TurnRequest::new(
            "delivery_address",
            vec![Entity::new("delivery_address", "1 Main St")],
        ),
        TurnRequest::new("order_status", vec![]),
        TurnRequest::new("goodbye", vec![]),
    ];

    let span = tracing::info_span!("conversation");
    async {
        for turn in &script {
            info!(intent = %turn.intent, "User turn");
            let replies = system
                .handle_turn(turn)
                .await
                .map_err(|e| e.to_string())?;
            for reply in replies {
                println!("bot> {reply}");
            }
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Demo conversation completed");
    Ok(())
}
