use axum::{extract::State, Extension, Json};

use crate::middleware::RequestId;
use dropoff_core::Category;

use super::{map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state
        .store
        .list_categories()
        .await
        .map_err(|e| map_store_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: categories,
        meta: ResponseMeta::new(req_id.0),
    }))
}
