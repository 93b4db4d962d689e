//! Geocoding client error types.

/// Errors from the LocationIQ geocoding client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The address did not resolve to any location
    #[error("address not found: {0}")]
    AddressNotFound(String),

    /// Invalid API key
    #[error("unauthorized (invalid LocationIQ API key)")]
    Unauthorized,

    /// Request blocked by the provider (key restrictions or abuse limits)
    #[error("LocationIQ blocked the request; check the key and its limits")]
    Blocked,

    /// Rate limited by the API
    #[error("rate limited by LocationIQ")]
    RateLimited,

    /// API returned an unexpected error status
    #[error("geocoding API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be interpreted
    #[error("geocoding response parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
