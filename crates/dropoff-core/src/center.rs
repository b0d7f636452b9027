//! Domain types for the donation-center directory.
//!
//! These are read-only snapshots: the store materializes them per request
//! and the search pipeline never mutates them. Serde field names follow the
//! public wire contract (`zip_code`, `hours_of_operation`, …).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]. Values
/// outside those ranges are not validated; distances computed from them are
/// undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components converted to radians, latitude first.
    #[must_use]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

/// Opening hours keyed by lowercase day name (`"monday"`…`"sunday"`).
///
/// A missing day means the center is closed that day. Day strings are
/// free-form; the hours evaluator recognises `"closed"`, `"24 hours"`, and
/// `"H:MM AM - H:MM PM"` shapes and treats everything else as closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(HashMap<String, String>);

impl WeeklySchedule {
    #[must_use]
    pub fn day(&self, day: &str) -> Option<&str> {
        self.0.get(day).map(String::as_str)
    }

    pub fn insert(&mut self, day: impl Into<String>, hours: impl Into<String>) {
        self.0.insert(day.into(), hours.into());
    }
}

impl<D: Into<String>, H: Into<String>> FromIterator<(D, H)> for WeeklySchedule {
    fn from_iter<I: IntoIterator<Item = (D, H)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(day, hours)| (day.into(), hours.into()))
                .collect(),
        )
    }
}

/// A category as embedded in center payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTag {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// A standalone category directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl Category {
    #[must_use]
    pub fn tag(&self) -> CategoryTag {
        CategoryTag {
            name: self.name.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
        }
    }
}

/// One donation center record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub hours_of_operation: Option<WeeklySchedule>,
    #[serde(default)]
    pub accepted_items: Vec<String>,
    #[serde(default)]
    pub organization_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub categories: Vec<CategoryTag>,
}

impl Center {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Whether any of this center's category tags matches a name in `wanted`.
    ///
    /// Matching is exact; tag insertion order is irrelevant.
    #[must_use]
    pub fn matches_any_category(&self, wanted: &[String]) -> bool {
        self.categories
            .iter()
            .any(|tag| wanted.iter().any(|name| name == &tag.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_schedule_round_trips_as_plain_map() {
        let schedule: WeeklySchedule =
            [("monday", "9:00 AM - 5:00 PM"), ("sunday", "Closed")]
                .into_iter()
                .collect();
        let json = serde_json::to_value(&schedule).expect("serialize");
        assert_eq!(json["monday"], "9:00 AM - 5:00 PM");
        let back: WeeklySchedule = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.day("sunday"), Some("Closed"));
        assert_eq!(back.day("tuesday"), None);
    }

    #[test]
    fn center_serializes_with_wire_field_names() {
        let center = Center {
            id: 7,
            name: "Central Food Bank".to_string(),
            address: "123 Main Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94102".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
            phone: Some("(415) 555-0123".to_string()),
            email: None,
            website: None,
            hours_of_operation: None,
            accepted_items: vec!["Canned goods".to_string()],
            organization_type: Some("Food Bank".to_string()),
            description: None,
            special_instructions: Some("Call ahead".to_string()),
            categories: vec![CategoryTag {
                name: "Food Banks".to_string(),
                icon: "🍞".to_string(),
                color: "#FF6B6B".to_string(),
            }],
        };
        let json = serde_json::to_value(&center).expect("serialize");
        assert_eq!(json["zip_code"], "94102");
        assert_eq!(json["accepted_items"][0], "Canned goods");
        assert_eq!(json["organization_type"], "Food Bank");
        assert_eq!(json["special_instructions"], "Call ahead");
        assert_eq!(json["categories"][0]["name"], "Food Banks");
        assert_eq!(json["categories"][0]["icon"], "🍞");
        assert_eq!(json["categories"][0]["color"], "#FF6B6B");
    }

    #[test]
    fn category_match_is_exact_and_any_of() {
        let center = Center {
            id: 1,
            name: "x".to_string(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            phone: None,
            email: None,
            website: None,
            hours_of_operation: None,
            accepted_items: Vec::new(),
            organization_type: None,
            description: None,
            special_instructions: None,
            categories: vec![
                CategoryTag {
                    name: "Food Banks".to_string(),
                    icon: String::new(),
                    color: String::new(),
                },
                CategoryTag {
                    name: "Homeless Shelters".to_string(),
                    icon: String::new(),
                    color: String::new(),
                },
            ],
        };
        assert!(center.matches_any_category(&["Homeless Shelters".to_string()]));
        assert!(!center.matches_any_category(&["food banks".to_string()]));
        assert!(!center.matches_any_category(&["Clothing Donations".to_string()]));
    }
}
