//! The menu catalog and fuzzy item-name resolution.

use serde::Deserialize;
use tracing::debug;

use crate::catalog::distance::edit_distance;

/// A fuzzy match is accepted only when its edit distance is strictly below
/// this threshold.
pub const FUZZY_DISTANCE_LIMIT: usize = 3;

/// A single entry of the menu.
///
/// Loaded once from reference data at startup and never mutated. The name is
/// the natural key; names are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Price in USD. Never negative in valid reference data.
    pub price: f64,
    /// Preparation time in whole hours.
    pub preparation_time: u32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64, preparation_time: u32) -> Self {
        Self {
            name: name.into(),
            price,
            preparation_time,
        }
    }
}

/// Immutable lookup table of menu items.
///
/// Resolution runs an exact case-insensitive pass first and falls back to a
/// fuzzy pass under [`FUZZY_DISTANCE_LIMIT`]. Both passes break ties by
/// catalog order (first entry wins), which also covers the case of duplicate
/// names in the reference data.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolves a user-supplied item name to a canonical menu entry.
    ///
    /// - Exact pass: first item whose name equals `candidate`
    ///   case-insensitively.
    /// - Fuzzy pass: item with the minimum edit distance to `candidate`
    ///   (case-insensitive), accepted only when that distance is strictly
    ///   below [`FUZZY_DISTANCE_LIMIT`]. The scan keeps the first item on
    ///   ties (strict `<` comparison).
    ///
    /// An empty candidate and an empty catalog both resolve to `None`.
    pub fn resolve(&self, candidate: &str) -> Option<&MenuItem> {
        if candidate.is_empty() {
            return None;
        }
        let wanted = candidate.to_lowercase();

        if let Some(item) = self
            .items
            .iter()
            .find(|item| item.name.to_lowercase() == wanted)
        {
            return Some(item);
        }

        let mut best: Option<(&MenuItem, usize)> = None;
        for item in &self.items {
            let distance = edit_distance(&wanted, &item.name.to_lowercase());
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((item, distance));
            }
        }

        match best {
            Some((item, distance)) if distance < FUZZY_DISTANCE_LIMIT => {
                debug!(candidate, matched = %item.name, distance, "Fuzzy match");
                Some(item)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(vec![
            MenuItem::new("Pizza", 10.0, 1),
            MenuItem::new("Salad", 6.0, 0),
            MenuItem::new("Burger", 8.5, 1),
        ])
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("pizza").unwrap().name, "Pizza");
        assert_eq!(catalog.resolve("PIZZA").unwrap().name, "Pizza");
        assert_eq!(catalog.resolve("Pizza").unwrap().name, "Pizza");
    }

    #[test]
    fn fuzzy_match_within_threshold() {
        let catalog = catalog();
        // distance 1 from "pizza"
        assert_eq!(catalog.resolve("piza").unwrap().name, "Pizza");
        // distance 2 from "salad"
        assert_eq!(catalog.resolve("selat").unwrap().name, "Salad");
    }

    #[test]
    fn fuzzy_match_rejected_at_threshold() {
        let catalog = catalog();
        assert!(catalog.resolve("xyz123").is_none());
    }

    #[test]
    fn tie_break_prefers_catalog_order() {
        let catalog = MenuCatalog::new(vec![
            MenuItem::new("cola", 2.0, 0),
            MenuItem::new("coma", 2.0, 0),
        ]);
        // "colb" is distance 1 from both; the first entry must win.
        assert_eq!(catalog.resolve("colb").unwrap().name, "cola");
    }

    #[test]
    fn empty_candidate_never_matches() {
        assert!(catalog().resolve("").is_none());
    }

    #[test]
    fn empty_catalog_never_matches() {
        let catalog = MenuCatalog::new(Vec::new());
        assert!(catalog.resolve("pizza").is_none());
    }

    #[test]
    fn resolution_has_no_side_effects() {
        let catalog = catalog();
        let before = catalog.items().to_vec();
        let _ = catalog.resolve("piza");
        let _ = catalog.resolve("nonsense");
        assert_eq!(catalog.items(), before.as_slice());
    }
}
