//! Seed dataset: categories and centers served when no database is configured.
//!
//! The primary dataset ships as a YAML file (`config/centers.yaml`). When the
//! file is missing or unreadable, [`SeedFile::builtin`] supplies a small
//! hard-coded fallback so the service always has something to serve.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::center::{Category, CategoryTag, Center, WeeklySchedule};
use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    pub categories: Vec<Category>,
    pub centers: Vec<Center>,
}

impl SeedFile {
    /// Load the seed dataset from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] if the file cannot be read and
    /// [`ConfigError::ParseFile`] if it is not valid YAML for this shape.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::ParseFile {
            path: path.display().to_string(),
            source,
        })
    }

    /// The built-in fallback dataset: eight categories and three San
    /// Francisco centers.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = vec![
            builtin_category(1, "Food Banks", "🍞", "#FF6B6B"),
            builtin_category(2, "Clothing Donations", "👕", "#4ECDC4"),
            builtin_category(3, "Homeless Shelters", "🏠", "#45B7D1"),
            builtin_category(4, "Medical Supplies", "🏥", "#96CEB4"),
            builtin_category(5, "Electronics Recycling", "💻", "#FFEAA7"),
            builtin_category(6, "Book Donations", "📚", "#DDA0DD"),
            builtin_category(7, "Toy Donations", "🧸", "#FFB6C1"),
            builtin_category(8, "Animal Shelters", "🐕", "#98D8C8"),
        ];

        let weekday_nine_to_five: WeeklySchedule = [
            ("monday", "9:00 AM - 5:00 PM"),
            ("tuesday", "9:00 AM - 5:00 PM"),
            ("wednesday", "9:00 AM - 5:00 PM"),
            ("thursday", "9:00 AM - 5:00 PM"),
            ("friday", "9:00 AM - 5:00 PM"),
            ("saturday", "10:00 AM - 2:00 PM"),
            ("sunday", "Closed"),
        ]
        .into_iter()
        .collect();

        let retail_hours: WeeklySchedule = [
            ("monday", "8:00 AM - 8:00 PM"),
            ("tuesday", "8:00 AM - 8:00 PM"),
            ("wednesday", "8:00 AM - 8:00 PM"),
            ("thursday", "8:00 AM - 8:00 PM"),
            ("friday", "8:00 AM - 8:00 PM"),
            ("saturday", "8:00 AM - 6:00 PM"),
            ("sunday", "10:00 AM - 6:00 PM"),
        ]
        .into_iter()
        .collect();

        let always_open: WeeklySchedule = [
            ("monday", "24 hours"),
            ("tuesday", "24 hours"),
            ("wednesday", "24 hours"),
            ("thursday", "24 hours"),
            ("friday", "24 hours"),
            ("saturday", "24 hours"),
            ("sunday", "24 hours"),
        ]
        .into_iter()
        .collect();

        let centers = vec![
            Center {
                id: 1,
                name: "Central Food Bank".to_string(),
                address: "123 Main Street".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip_code: "94102".to_string(),
                latitude: 37.7749,
                longitude: -122.4194,
                phone: Some("(415) 555-0123".to_string()),
                email: Some("info@centralfoodbank.org".to_string()),
                website: Some("https://centralfoodbank.org".to_string()),
                hours_of_operation: Some(weekday_nine_to_five),
                accepted_items: vec![
                    "Non-perishable food".to_string(),
                    "Canned goods".to_string(),
                    "Fresh produce".to_string(),
                ],
                organization_type: Some("Food Bank".to_string()),
                description: Some(
                    "Serving the San Francisco community with fresh food and groceries for families in need."
                        .to_string(),
                ),
                special_instructions: None,
                categories: vec![builtin_tag("Food Banks", "🍞", "#FF6B6B")],
            },
            Center {
                id: 2,
                name: "Goodwill Donation Center".to_string(),
                address: "456 Oak Avenue".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip_code: "94103".to_string(),
                latitude: 37.7849,
                longitude: -122.4094,
                phone: Some("(415) 555-0456".to_string()),
                email: Some("donations@goodwillsf.org".to_string()),
                website: Some("https://goodwillsf.org".to_string()),
                hours_of_operation: Some(retail_hours),
                accepted_items: vec![
                    "Clothing".to_string(),
                    "Shoes".to_string(),
                    "Household items".to_string(),
                    "Electronics".to_string(),
                ],
                organization_type: Some("Thrift Store".to_string()),
                description: Some(
                    "Accepting gently used clothing, household items, and electronics to support job training programs."
                        .to_string(),
                ),
                special_instructions: None,
                categories: vec![builtin_tag("Clothing Donations", "👕", "#4ECDC4")],
            },
            Center {
                id: 3,
                name: "St. Mary's Homeless Shelter".to_string(),
                address: "789 Pine Street".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip_code: "94104".to_string(),
                latitude: 37.7949,
                longitude: -122.3994,
                phone: Some("(415) 555-0789".to_string()),
                email: Some("help@stmarysshelter.org".to_string()),
                website: Some("https://stmarysshelter.org".to_string()),
                hours_of_operation: Some(always_open),
                accepted_items: vec![
                    "Blankets".to_string(),
                    "Warm clothing".to_string(),
                    "Personal hygiene items".to_string(),
                    "Non-perishable food".to_string(),
                ],
                organization_type: Some("Homeless Shelter".to_string()),
                description: Some(
                    "Providing shelter, meals, and support services for individuals experiencing homelessness."
                        .to_string(),
                ),
                special_instructions: None,
                categories: vec![builtin_tag("Homeless Shelters", "🏠", "#45B7D1")],
            },
        ];

        Self {
            categories,
            centers,
        }
    }
}

fn builtin_category(id: i64, name: &str, icon: &str, color: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

fn builtin_tag(name: &str, icon: &str, color: &str) -> CategoryTag {
    CategoryTag {
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_has_expected_shape() {
        let seed = SeedFile::builtin();
        assert_eq!(seed.categories.len(), 8);
        assert_eq!(seed.centers.len(), 3);
        assert!(seed
            .centers
            .iter()
            .all(|c| c.hours_of_operation.is_some() && !c.categories.is_empty()));
    }

    #[test]
    fn builtin_dataset_round_trips_through_yaml() {
        let seed = SeedFile::builtin();
        let yaml = serde_yaml::to_string(&seed).expect("serialize");
        let back: SeedFile = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(back.centers.len(), seed.centers.len());
        assert_eq!(back.centers[0].zip_code, "94102");
        assert_eq!(
            back.centers[2]
                .hours_of_operation
                .as_ref()
                .and_then(|h| h.day("wednesday")),
            Some("24 hours")
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let result = SeedFile::load(Path::new("/nonexistent/centers.yaml"));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }
}
