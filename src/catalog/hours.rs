//! Opening hours reference data.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Opening and closing times for one day, kept as the display strings from
/// the reference data (e.g. `"09:00"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DayHours {
    pub open: String,
    pub close: String,
}

/// Opening hours keyed by day name.
///
/// Day names are looked up exactly as extracted by the NLU layer; the
/// reference data and the entity values share the same casing.
#[derive(Debug, Clone, Default)]
pub struct OpeningHours {
    days: BTreeMap<String, DayHours>,
}

impl OpeningHours {
    pub fn new(days: BTreeMap<String, DayHours>) -> Self {
        Self { days }
    }

    pub fn for_day(&self, day: &str) -> Option<&DayHours> {
        self.days.get(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_day_name() {
        let mut days = BTreeMap::new();
        days.insert(
            "Monday".to_string(),
            DayHours {
                open: "09:00".to_string(),
                close: "22:00".to_string(),
            },
        );
        let hours = OpeningHours::new(days);

        let monday = hours.for_day("Monday").unwrap();
        assert_eq!(monday.open, "09:00");
        assert_eq!(monday.close, "22:00");
        assert!(hours.for_day("Sunday").is_none());
    }
}
