//! LocationIQ geocoding HTTP client.
//!
//! Resolves free-text US place names to coordinates. One lookup per
//! endpoint per request; failures abort the whole request upstream, so
//! there is no retry logic here.

use serde::Deserialize;

use super::error::GeocodeError;

/// Default base URL for the LocationIQ API.
const DEFAULT_BASE_URL: &str = "https://us1.locationiq.com/v1";

/// A geocoded position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the LocationIQ search response.
///
/// LocationIQ serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key, passed as a query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production LocationIQ)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// LocationIQ geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeocodeClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Resolve a free-text place name to coordinates.
    pub async fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", address),
                ("format", "json"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GeocodeError::Unauthorized);
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodeError::Blocked);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }
        // LocationIQ answers 404 when nothing matches the query.
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GeocodeError::AddressNotFound(address.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_search_response(&body, address)
    }
}

/// Parse the search response body into coordinates.
fn parse_search_response(body: &str, address: &str) -> Result<Coordinates, GeocodeError> {
    let results: Vec<SearchResult> = serde_json::from_str(body).map_err(|e| GeocodeError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    let Some(first) = results.first() else {
        return Err(GeocodeError::AddressNotFound(address.to_string()));
    };

    let lat: f64 = first.lat.parse().map_err(|_| GeocodeError::Json {
        message: format!("latitude is not a number: {}", first.lat),
        body: None,
    })?;
    let lon: f64 = first.lon.parse().map_err(|_| GeocodeError::Json {
        message: format!("longitude is not a number: {}", first.lon),
        body: None,
    })?;

    Ok(Coordinates { lat, lon })
}
