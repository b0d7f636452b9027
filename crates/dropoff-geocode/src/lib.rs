//! Address-to-coordinate resolution with two strategies.
//!
//! With an OpenCage API key configured, geocoding goes to the remote API.
//! Without one the static lookup table answers, so local development and
//! demos work fully offline. The strategy is chosen once at startup, never
//! per call site.

mod client;
mod error;
mod static_lookup;

pub use client::OpenCageClient;
pub use error::GeocodeError;
pub use static_lookup::StaticGeocoder;

use serde::{Deserialize, Serialize};

/// A resolved address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
}

/// Geocoding service: remote API or static table, selected by configuration.
#[derive(Debug)]
pub enum Geocoder {
    OpenCage(OpenCageClient),
    Static(StaticGeocoder),
}

impl Geocoder {
    /// A geocoder backed by the OpenCage API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built.
    pub fn opencage(api_key: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Ok(Self::OpenCage(OpenCageClient::new(api_key, timeout_secs)?))
    }

    /// A geocoder backed by the static city/ZIP lookup table.
    #[must_use]
    pub fn static_table() -> Self {
        Self::Static(StaticGeocoder::new())
    }

    /// Resolve a free-text address to coordinates.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::NoMatch`] if the remote API has no result for the
    ///   address (the static table never misses; it falls back to San
    ///   Francisco).
    /// - [`GeocodeError::Http`] / [`GeocodeError::Deserialize`] on remote
    ///   transport or payload failures.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        match self {
            Self::OpenCage(client) => client.geocode(address).await,
            Self::Static(table) => Ok(table.resolve(address)),
        }
    }
}
