//! Search parameters and result types.

use dropoff_core::{Center, Coordinate};
use serde::{Deserialize, Serialize};

/// Default search radius in miles.
pub const DEFAULT_RADIUS_MILES: f64 = 25.0;
/// Default maximum number of results.
pub const DEFAULT_LIMIT: usize = 50;

/// Ranking key for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by distance from the origin.
    #[default]
    Distance,
    /// Ascending, case-folded, by center name.
    Name,
    /// Ascending, case-folded, by first category name (centers without
    /// categories sort first).
    Category,
    /// Open centers before closed ones, input order within each group.
    ///
    /// `hours` is the wire name legacy web clients send.
    #[serde(alias = "hours")]
    OpenFirst,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Self::Distance),
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "open_first" | "hours" => Ok(Self::OpenFirst),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Parameters for one nearby-search invocation.
///
/// Nothing here is validated: a non-positive radius or non-finite origin
/// flows through the math and yields degenerate (usually empty) results
/// rather than an error.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub origin: Coordinate,
    /// Search radius in miles.
    pub radius_miles: f64,
    /// Category names to match, any-of, exact. Empty means no filter.
    pub categories: Vec<String>,
    /// Keep only centers open at the evaluation time.
    pub open_now: bool,
    pub sort_by: SortKey,
    /// Maximum number of results returned.
    pub limit: usize,
}

impl SearchRequest {
    /// A request with the default radius, limit, and sort, no filters.
    #[must_use]
    pub fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            radius_miles: DEFAULT_RADIUS_MILES,
            categories: Vec::new(),
            open_now: false,
            sort_by: SortKey::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A center annotated with its distance from the search origin.
///
/// Transient: created per search and discarded after serialization. The
/// flattened serde shape keeps the wire contract: center fields at the top
/// level with `distance` alongside.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCenter {
    #[serde(flatten)]
    pub center: Center,
    /// Miles from the search origin.
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parses_wire_values() {
        assert_eq!("distance".parse::<SortKey>(), Ok(SortKey::Distance));
        assert_eq!("name".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!("category".parse::<SortKey>(), Ok(SortKey::Category));
        assert_eq!("open_first".parse::<SortKey>(), Ok(SortKey::OpenFirst));
        assert!("nearest".parse::<SortKey>().is_err());
    }

    #[test]
    fn sort_key_accepts_hours_alias() {
        assert_eq!("hours".parse::<SortKey>(), Ok(SortKey::OpenFirst));
        let from_json: SortKey = serde_json::from_str("\"hours\"").expect("alias");
        assert_eq!(from_json, SortKey::OpenFirst);
        // The canonical wire name round-trips.
        assert_eq!(
            serde_json::to_string(&SortKey::OpenFirst).expect("serialize"),
            "\"open_first\""
        );
    }

    #[test]
    fn request_defaults() {
        let request = SearchRequest::new(Coordinate::new(37.7749, -122.4194));
        assert!((request.radius_miles - 25.0).abs() < f64::EPSILON);
        assert_eq!(request.limit, 50);
        assert_eq!(request.sort_by, SortKey::Distance);
        assert!(request.categories.is_empty());
        assert!(!request.open_now);
    }

    #[test]
    fn scored_center_flattens_distance_into_payload() {
        let center = Center {
            id: 1,
            name: "Central Food Bank".to_string(),
            address: "123 Main Street".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94102".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
            phone: None,
            email: None,
            website: None,
            hours_of_operation: None,
            accepted_items: Vec::new(),
            organization_type: None,
            description: None,
            special_instructions: None,
            categories: Vec::new(),
        };
        let scored = ScoredCenter {
            center,
            distance: 1.25,
        };
        let json = serde_json::to_value(&scored).expect("serialize");
        assert_eq!(json["zip_code"], "94102");
        assert!((json["distance"].as_f64().expect("distance") - 1.25).abs() < f64::EPSILON);
    }
}
