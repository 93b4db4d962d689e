//! OSRM routing HTTP client.
//!
//! Requests a single driving route between two coordinates. By design
//! this is exactly one call per planning request: no retries, no
//! alternative routes.

use crate::domain::{METERS_PER_MILE, RoutePoint};
use crate::geocode::Coordinates;

use super::error::OsrmError;
use super::types::OsrmResponse;

/// Default base URL for the public OSRM demo server.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// A computed route: polyline, length and driving time.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Route polyline in travel order.
    pub geometry: Vec<RoutePoint>,

    /// Route length in miles, as reported by OSRM.
    pub distance_miles: f64,

    /// Driving duration in seconds.
    pub duration_secs: f64,
}

/// Configuration for the OSRM client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL for the API (defaults to the public OSRM server)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OsrmConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
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

impl Default for OsrmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OSRM routing client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OsrmConfig) -> Result<Self, OsrmError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Compute the driving route from `origin` to `destination`.
    pub async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteSummary, OsrmError> {
        // OSRM takes coordinates as lon,lat pairs.
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, origin.lon, origin.lat, destination.lon, destination.lat
        );

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OsrmError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_route_response(&body)
    }
}

/// Parse the response body into a route summary.
fn parse_route_response(body: &str) -> Result<RouteSummary, OsrmError> {
    let parsed: OsrmResponse = serde_json::from_str(body).map_err(|e| OsrmError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    if parsed.code != "Ok" {
        return Err(OsrmError::NoRoute);
    }

    let Some(route) = parsed.routes.into_iter().next() else {
        return Err(OsrmError::NoRoute);
    };

    let geometry = route
        .geometry
        .coordinates
        .iter()
        .map(|&[lon, lat]| RoutePoint::new(lon, lat))
        .collect();

    Ok(RouteSummary {
        geometry,
        distance_miles: route.distance / METERS_PER_MILE,
        duration_secs: route.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = OsrmConfig::new()
            .with_base_url("http://localhost:5000")
            .with_timeout(60);

        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = OsrmConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 15);
    }

    #[test]
    fn client_creation() {
        let client = OsrmClient::new(OsrmConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn parses_route_into_summary() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "geometry": {"coordinates": [[-101.84, 35.19], [-101.50, 35.25]]},
                "distance": 160934.4,
                "duration": 5400.0
            }]
        }"#;

        let summary = parse_route_response(body).unwrap();
        assert_eq!(summary.geometry.len(), 2);
        assert_eq!(summary.geometry[0], RoutePoint::new(-101.84, 35.19));
        assert!((summary.distance_miles - 100.0).abs() < 1e-9);
        assert_eq!(summary.duration_secs, 5400.0);
    }

    #[test]
    fn non_ok_code_is_no_route() {
        let body = r#"{"code": "NoRoute"}"#;
        assert!(matches!(parse_route_response(body), Err(OsrmError::NoRoute)));
    }

    #[test]
    fn ok_code_without_routes_is_no_route() {
        let body = r#"{"code": "Ok", "routes": []}"#;
        assert!(matches!(parse_route_response(body), Err(OsrmError::NoRoute)));
    }

    #[test]
    fn garbage_body_is_json_error() {
        assert!(matches!(
            parse_route_response("<html>"),
            Err(OsrmError::Json { .. })
        ));
    }
}
