//! The order ledger state: placed orders and everything derived from them.

use chrono::{DateTime, Duration, Utc};

use crate::catalog::MenuItem;
use crate::ledger::LedgerError;

/// Render format for readiness timestamps in user-facing messages.
const READY_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Whether an order is picked up in the restaurant or delivered.
///
/// Every order starts as [`Fulfillment::Pickup`]; supplying a delivery
/// address later replaces the state wholesale for the most recent order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fulfillment {
    Pickup,
    Delivery(String),
}

impl std::fmt::Display for Fulfillment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fulfillment::Pickup => write!(f, "Pick-up on place."),
            Fulfillment::Delivery(address) => write!(f, "Delivery at {address}."),
        }
    }
}

/// A placed order.
///
/// The item fields are copied from the resolved [`MenuItem`] at placement
/// time, so later catalog changes never affect existing orders. `id` always
/// equals the order's index in the ledger; `ready_at` is computed once at
/// placement and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: usize,
    pub name: String,
    pub price: f64,
    pub preparation_time: u32,
    pub ready_at: DateTime<Utc>,
    /// Free-text request from the guest; empty string when none was given.
    pub special_request: String,
    pub fulfillment: Fulfillment,
}

impl Order {
    /// Summary line: `{name} {special_request} - ready at {ready_at}`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} {} - ready at {}",
            self.name,
            self.special_request,
            self.ready_at.format(READY_AT_FORMAT)
        )
    }

    /// Status line: `{name} {special_request} - will be ready at {ready_at}.
    /// {fulfillment}`.
    pub fn status_line(&self) -> String {
        format!(
            "{} {} - will be ready at {}. {}",
            self.name,
            self.special_request,
            self.ready_at.format(READY_AT_FORMAT),
            self.fulfillment
        )
    }
}

/// Itemized view of the ledger plus the running total.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    /// One line per order, in placement order.
    pub lines: Vec<String>,
    /// Sum of all order prices, USD.
    pub total_price: f64,
}

/// The ordered sequence of placed orders for one conversation.
///
/// Append-only except for [`Ledger::reset`]; insertion order, placement
/// order, and id order are all the same thing. The ledger never re-validates
/// items; resolution against the catalog happened before placement.
#[derive(Debug, Default)]
pub struct Ledger {
    orders: Vec<Order>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Appends a new order placed now.
    pub fn place(&mut self, item: &MenuItem, special_request: &str) -> Order {
        self.place_at(item, special_request, Utc::now())
    }

    /// Appends a new order placed at `placed_at`.
    ///
    /// The new order gets `id = len()`, copies of the item fields,
    /// `ready_at = placed_at + preparation_time` hours, and pickup
    /// fulfillment. Returns a clone of the appended order.
    pub fn place_at(
        &mut self,
        item: &MenuItem,
        special_request: &str,
        placed_at: DateTime<Utc>,
    ) -> Order {
        let order = Order {
            id: self.orders.len(),
            name: item.name.clone(),
            price: item.price,
            preparation_time: item.preparation_time,
            ready_at: placed_at + Duration::hours(i64::from(item.preparation_time)),
            special_request: special_request.to_string(),
            fulfillment: Fulfillment::Pickup,
        };
        self.orders.push(order.clone());
        order
    }

    /// Switches the most recently placed order to delivery at `address`.
    ///
    /// Earlier orders are never touched; there is no way to address them.
    pub fn set_delivery_address(&mut self, address: &str) -> Result<(), LedgerError> {
        let order = self.orders.last_mut().ok_or(LedgerError::NoActiveOrder)?;
        order.fulfillment = Fulfillment::Delivery(address.to_string());
        Ok(())
    }

    /// Itemized summary of every order plus the running total.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            lines: self.orders.iter().map(Order::summary_line).collect(),
            total_price: self.orders.iter().map(|order| order.price).sum(),
        }
    }

    /// One status line per order, including fulfillment state.
    pub fn status_report(&self) -> Vec<String> {
        self.orders.iter().map(Order::status_line).collect()
    }

    /// Discards all orders; the next placement starts a fresh id sequence.
    pub fn reset(&mut self) {
        self.orders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pizza() -> MenuItem {
        MenuItem::new("Pizza", 10.0, 1)
    }

    fn salad() -> MenuItem {
        MenuItem::new("Salad", 6.0, 0)
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn placement_assigns_sequential_ids() {
        let mut ledger = Ledger::new();
        for expected in 0..5 {
            let order = ledger.place_at(&pizza(), "", noon());
            assert_eq!(order.id, expected);
        }
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn placement_copies_item_fields_and_derives_ready_at() {
        let mut ledger = Ledger::new();
        let order = ledger.place_at(&pizza(), "extra cheese", noon());

        assert_eq!(order.name, "Pizza");
        assert_eq!(order.price, 10.0);
        assert_eq!(order.preparation_time, 1);
        assert_eq!(order.ready_at, noon() + Duration::hours(1));
        assert_eq!(order.special_request, "extra cheese");
        assert_eq!(order.fulfillment, Fulfillment::Pickup);
    }

    #[test]
    fn catalog_changes_do_not_retroact() {
        let mut ledger = Ledger::new();
        let mut item = pizza();
        ledger.place_at(&item, "", noon());
        item.price = 99.0;

        assert_eq!(item.price, 99.0);
        assert_eq!(ledger.summary().total_price, 10.0);
    }

    #[test]
    fn summary_totals_all_orders_and_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger.place_at(&pizza(), "extra cheese", noon());
        ledger.place_at(&salad(), "", noon());

        let first = ledger.summary();
        assert_eq!(first.total_price, 16.0);
        assert_eq!(first.lines.len(), 2);
        assert_eq!(
            first.lines[0],
            "Pizza extra cheese - ready at 2024-05-01 13:00"
        );
        assert_eq!(first.lines[1], "Salad  - ready at 2024-05-01 12:00");

        assert_eq!(ledger.summary(), first);
    }

    #[test]
    fn delivery_update_targets_only_the_last_order() {
        let mut ledger = Ledger::new();
        ledger.place_at(&pizza(), "", noon());
        ledger.place_at(&salad(), "", noon());

        ledger.set_delivery_address("1 Main St").unwrap();

        let report = ledger.status_report();
        assert!(report[0].ends_with("Pick-up on place."));
        assert!(report[1].ends_with("Delivery at 1 Main St."));
    }

    #[test]
    fn delivery_update_on_empty_ledger_is_rejected() {
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.set_delivery_address("1 Main St"),
            Err(LedgerError::NoActiveOrder)
        );
        assert!(ledger.is_empty());
    }

    #[test]
    fn reset_clears_and_restarts_ids() {
        let mut ledger = Ledger::new();
        ledger.place_at(&pizza(), "", noon());
        ledger.place_at(&salad(), "", noon());
        ledger.reset();

        assert!(ledger.is_empty());
        let order = ledger.place_at(&salad(), "", noon());
        assert_eq!(order.id, 0);
    }

    #[test]
    fn status_line_includes_fulfillment() {
        let mut ledger = Ledger::new();
        ledger.place_at(&pizza(), "no olives", noon());

        assert_eq!(
            ledger.status_report()[0],
            "Pizza no olives - will be ready at 2024-05-01 13:00. Pick-up on place."
        );
    }
}
