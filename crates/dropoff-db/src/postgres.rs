//! Read operations for the `centers` and `categories` tables.

use sqlx::PgPool;

use dropoff_core::{Category, Center};

/// A row from the `centers` table with its categories aggregated as JSON.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CenterRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours_of_operation: Option<serde_json::Value>,
    pub accepted_items: Vec<String>,
    pub organization_type: Option<String>,
    pub description: Option<String>,
    pub special_instructions: Option<String>,
    /// `[{name, icon, color}, …]` built by `json_agg` in the query.
    pub categories: serde_json::Value,
}

impl From<CenterRow> for Center {
    fn from(row: CenterRow) -> Self {
        // Malformed JSONB payloads degrade to "no data" rather than failing
        // the whole result set.
        let hours_of_operation = row
            .hours_of_operation
            .and_then(|value| serde_json::from_value(value).ok());
        let categories = serde_json::from_value(row.categories).unwrap_or_default();

        Center {
            id: row.id,
            name: row.name,
            address: row.address,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            latitude: row.latitude,
            longitude: row.longitude,
            phone: row.phone,
            email: row.email,
            website: row.website,
            hours_of_operation,
            accepted_items: row.accepted_items,
            organization_type: row.organization_type,
            description: row.description,
            special_instructions: row.special_instructions,
            categories,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    icon: String,
    color: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            icon: row.icon,
            color: row.color,
        }
    }
}

const CENTER_SELECT: &str = "SELECT c.id, c.name, c.address, c.city, c.state, c.zip_code, \
            c.latitude, c.longitude, c.phone, c.email, c.website, \
            c.hours_of_operation, c.accepted_items, c.organization_type, \
            c.description, c.special_instructions, \
            COALESCE( \
                json_agg(json_build_object( \
                    'name', cat.name, 'icon', cat.icon, 'color', cat.color \
                ) ORDER BY cc.position, cat.name) \
                FILTER (WHERE cat.id IS NOT NULL), \
                '[]'::json \
            ) AS categories \
     FROM centers c \
     LEFT JOIN center_categories cc ON cc.center_id = c.id \
     LEFT JOIN categories cat ON cat.id = cc.category_id";

/// Query active centers, optionally narrowed to an any-of category match,
/// capped at `take` rows in id order.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub(crate) async fn list_active_centers(
    pool: &PgPool,
    categories: &[String],
    take: i64,
) -> Result<Vec<Center>, sqlx::Error> {
    let rows = if categories.is_empty() {
        sqlx::query_as::<_, CenterRow>(&format!(
            "{CENTER_SELECT} \
             WHERE c.is_active = TRUE \
             GROUP BY c.id \
             ORDER BY c.id \
             LIMIT $1"
        ))
        .bind(take)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, CenterRow>(&format!(
            "{CENTER_SELECT} \
             WHERE c.is_active = TRUE \
               AND EXISTS ( \
                   SELECT 1 \
                   FROM center_categories cc2 \
                   JOIN categories cat2 ON cat2.id = cc2.category_id \
                   WHERE cc2.center_id = c.id \
                     AND cat2.name = ANY($1) \
               ) \
             GROUP BY c.id \
             ORDER BY c.id \
             LIMIT $2"
        ))
        .bind(categories)
        .bind(take)
        .fetch_all(pool)
        .await?
    };

    Ok(rows.into_iter().map(Center::from).collect())
}

/// Fetch one active center by id with its categories.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub(crate) async fn get_center(pool: &PgPool, id: i64) -> Result<Option<Center>, sqlx::Error> {
    let row = sqlx::query_as::<_, CenterRow>(&format!(
        "{CENTER_SELECT} \
         WHERE c.is_active = TRUE AND c.id = $1 \
         GROUP BY c.id"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Center::from))
}

/// All categories ordered by name.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub(crate) async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CategoryRow>(
        "SELECT id, name, icon, color FROM categories ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Category::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> CenterRow {
        CenterRow {
            id: 42,
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
            hours_of_operation: Some(serde_json::json!({
                "monday": "9:00 AM - 5:00 PM",
                "sunday": "Closed"
            })),
            accepted_items: vec!["Canned goods".to_string()],
            organization_type: Some("Food Bank".to_string()),
            description: None,
            special_instructions: None,
            categories: serde_json::json!([
                {"name": "Food Banks", "icon": "🍞", "color": "#FF6B6B"}
            ]),
        }
    }

    #[test]
    fn row_converts_to_center() {
        let center = Center::from(sample_row());
        assert_eq!(center.id, 42);
        assert_eq!(
            center
                .hours_of_operation
                .as_ref()
                .and_then(|h| h.day("monday")),
            Some("9:00 AM - 5:00 PM")
        );
        assert_eq!(center.categories.len(), 1);
        assert_eq!(center.categories[0].name, "Food Banks");
    }

    #[test]
    fn malformed_hours_degrade_to_none() {
        let mut row = sample_row();
        row.hours_of_operation = Some(serde_json::json!([1, 2, 3]));
        let center = Center::from(row);
        assert!(center.hours_of_operation.is_none());
    }

    #[test]
    fn malformed_categories_degrade_to_empty() {
        let mut row = sample_row();
        row.categories = serde_json::json!("not-an-array");
        let center = Center::from(row);
        assert!(center.categories.is_empty());
    }
}
