use thiserror::Error;

/// Errors returned by the geocoding service.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered but had no result for the address.
    #[error("no geocoding result for address")]
    NoMatch,

    /// The API rejected the request or the base URL was invalid.
    #[error("geocoding API error: {0}")]
    ApiError(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
