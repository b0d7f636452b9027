//! HTTP client for the OpenCage forward-geocoding API.
//!
//! Wraps `reqwest` with API key management and typed response
//! deserialization. Only the first result is requested, with annotations
//! disabled.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::GeocodeResult;

const DEFAULT_BASE_URL: &str = "https://api.opencagedata.com/";

/// Client for the OpenCage geocoding API.
///
/// Use [`OpenCageClient::new`] for production or
/// [`OpenCageClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug)]
pub struct OpenCageClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl OpenCageClient {
    /// Creates a new client pointed at the production OpenCage API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GeocodeError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("dropoff/0.1 (donation-center-directory)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so the
        // joined path lands under the root rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| GeocodeError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves a free-text address to coordinates.
    ///
    /// Calls `geocode/v1/json` with `limit=1` and returns the first result.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NoMatch`] if the API returns zero results.
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let mut url = self
            .base_url
            .join("geocode/v1/json")
            .map_err(|e| GeocodeError::ApiError(format!("invalid endpoint path: {e}")))?;
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("key", &self.api_key)
            .append_pair("limit", "1")
            .append_pair("no_annotations", "1");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        let envelope: OpenCageResponse =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("geocode(q={address})"),
                source: e,
            })?;

        let first = envelope.results.into_iter().next().ok_or_else(|| {
            tracing::debug!(address, "opencage returned no results");
            GeocodeError::NoMatch
        })?;

        Ok(GeocodeResult {
            lat: first.geometry.lat,
            lng: first.geometry.lng,
            formatted_address: first.formatted,
        })
    }
}

#[derive(Debug, serde::Deserialize)]
struct OpenCageResponse {
    #[serde(default)]
    results: Vec<OpenCageEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct OpenCageEntry {
    geometry: OpenCageGeometry,
    formatted: String,
}

#[derive(Debug, serde::Deserialize)]
struct OpenCageGeometry {
    lat: f64,
    lng: f64,
}
