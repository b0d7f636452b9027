use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::middleware::RequestId;
use dropoff_geocode::{GeocodeError, GeocodeResult};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeBody {
    address: Option<String>,
}

pub(super) async fn geocode_address(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<GeocodeBody>,
) -> Result<Json<ApiResponse<GeocodeResult>>, ApiError> {
    let address = body.address.as_deref().map(str::trim).unwrap_or_default();
    if address.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "address is required",
        ));
    }

    match state.geocoder.geocode(address).await {
        Ok(result) => Ok(Json(ApiResponse {
            data: result,
            meta: ResponseMeta::new(req_id.0),
        })),
        Err(GeocodeError::NoMatch) => {
            Err(ApiError::new(req_id.0, "not_found", "address not found"))
        }
        Err(e) => {
            tracing::error!(error = %e, "geocoding failed");
            Err(ApiError::new(req_id.0, "internal_error", "geocoding failed"))
        }
    }
}
