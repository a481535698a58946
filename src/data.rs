//! Parsing of the startup reference data.
//!
//! The menu and opening-hours files both wrap their payload in an `items`
//! key:
//!
//! ```json
//! { "items": [ { "name": "Pizza", "price": 10, "preparation_time": 1 } ] }
//! { "items": { "Monday": { "open": "09:00", "close": "22:00" } } }
//! ```
//!
//! Parsing happens once at startup, outside the turn path. The dialogue core
//! only ever sees the finished [`MenuCatalog`] and [`OpeningHours`] values.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{DayHours, MenuCatalog, MenuItem, OpeningHours};

/// Errors raised while parsing reference data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The reference file is not valid JSON or does not match the expected
    /// shape.
    #[error("malformed reference data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct MenuFile {
    items: Vec<MenuItem>,
}

#[derive(Debug, Deserialize)]
struct HoursFile {
    items: BTreeMap<String, DayHours>,
}

/// Parses a menu reference file into a [`MenuCatalog`].
pub fn parse_menu(json: &str) -> Result<MenuCatalog, DataError> {
    let file: MenuFile = serde_json::from_str(json)?;
    Ok(MenuCatalog::new(file.items))
}

/// Parses an opening-hours reference file into [`OpeningHours`].
pub fn parse_opening_hours(json: &str) -> Result<OpeningHours, DataError> {
    let file: HoursFile = serde_json::from_str(json)?;
    Ok(OpeningHours::new(file.items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_items() {
        let catalog = parse_menu(
            r#"{"items": [
                {"name": "Pizza", "price": 10, "preparation_time": 1},
                {"name": "Salad", "price": 6.5, "preparation_time": 0}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.items().len(), 2);
        assert_eq!(catalog.items()[0].name, "Pizza");
        assert_eq!(catalog.items()[1].price, 6.5);
        assert_eq!(catalog.items()[1].preparation_time, 0);
    }

    #[test]
    fn parses_opening_hours() {
        let hours = parse_opening_hours(
            r#"{"items": {
                "Monday": {"open": "09:00", "close": "22:00"},
                "Tuesday": {"open": "09:00", "close": "23:00"}
            }}"#,
        )
        .unwrap();

        assert_eq!(hours.for_day("Tuesday").unwrap().close, "23:00");
        assert!(hours.for_day("Friday").is_none());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_menu("not json").is_err());
        assert!(parse_menu(r#"{"items": [{"name": "Pizza"}]}"#).is_err());
        assert!(parse_opening_hours(r#"{"items": []}"#).is_err());
    }
}
