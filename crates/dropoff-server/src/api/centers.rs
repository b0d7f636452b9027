use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::RequestId;
use dropoff_core::{Center, Coordinate};
use dropoff_search::{ScoredCenter, SearchRequest, SortKey, WallClock, DEFAULT_RADIUS_MILES};

use super::{map_store_error, normalize_limit, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct CentersQuery {
    lat: Option<f64>,
    lng: Option<f64>,
    radius: Option<f64>,
    /// Comma-separated category names; absent or `all` means no filter.
    category: Option<String>,
    open_now: Option<bool>,
    sort_by: Option<SortKey>,
    limit: Option<i64>,
}

pub(super) async fn search_centers(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CentersQuery>,
) -> Result<Json<ApiResponse<Vec<ScoredCenter>>>, ApiError> {
    let (Some(lat), Some(lng)) = (query.lat, query.lng) else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "latitude and longitude are required",
        ));
    };

    let limit = normalize_limit(query.limit);
    let request = SearchRequest {
        origin: Coordinate::new(lat, lng),
        radius_miles: query.radius.unwrap_or(DEFAULT_RADIUS_MILES),
        categories: parse_categories(query.category.as_deref()),
        open_now: query.open_now.unwrap_or(false),
        sort_by: query.sort_by.unwrap_or_default(),
        limit: usize::try_from(limit).unwrap_or(0),
    };

    // Fetch double the page: the radius filter runs after retrieval and an
    // exact-limit fetch would under-fill the result page.
    let candidates = state
        .store
        .list_active(&request.categories, limit * 2)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    let results = dropoff_search::search(&request, candidates, WallClock::now());

    Ok(Json(ApiResponse {
        data: results,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_center(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Center>>, ApiError> {
    let center = state
        .store
        .get_center(id)
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    match center {
        Some(center) => Ok(Json(ApiResponse {
            data: center,
            meta: ResponseMeta::new(req_id.0),
        })),
        None => Err(ApiError::new(req_id.0, "not_found", "center not found")),
    }
}

fn parse_categories(raw: Option<&str>) -> Vec<String> {
    raw.map_or_else(Vec::new, |raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("all"))
            .map(ToOwned::to_owned)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_categories_handles_absent_and_all() {
        assert!(parse_categories(None).is_empty());
        assert!(parse_categories(Some("all")).is_empty());
        assert!(parse_categories(Some("All")).is_empty());
        assert!(parse_categories(Some("")).is_empty());
    }

    #[test]
    fn parse_categories_splits_and_trims() {
        assert_eq!(
            parse_categories(Some("Food Banks, Toy Donations")),
            vec!["Food Banks".to_string(), "Toy Donations".to_string()]
        );
        assert_eq!(
            parse_categories(Some("Food Banks,all,")),
            vec!["Food Banks".to_string()]
        );
    }
}
