//! OSRM response types.
//!
//! Minimal DTOs for the `/route/v1/driving` endpoint with
//! `overview=full&geometries=geojson`. Only the fields the planner needs
//! are modeled.

use serde::Deserialize;

/// Top-level OSRM route response.
#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    /// "Ok" on success; any other code means no usable route.
    pub code: String,

    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// One route alternative. We request no alternatives, so at most one.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub geometry: OsrmGeometry,

    /// Route length in meters.
    pub distance: f64,

    /// Driving duration in seconds.
    pub duration: f64,
}

/// GeoJSON LineString geometry.
#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    /// `[longitude, latitude]` pairs in travel order.
    pub coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_route_response() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "geometry": {
                    "coordinates": [[-101.84, 35.19], [-101.50, 35.25]],
                    "type": "LineString"
                },
                "legs": [],
                "distance": 51234.5,
                "duration": 1823.0
            }],
            "waypoints": []
        }"#;

        let parsed: OsrmResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code, "Ok");
        assert_eq!(parsed.routes.len(), 1);
        assert_eq!(parsed.routes[0].geometry.coordinates.len(), 2);
        assert_eq!(parsed.routes[0].distance, 51234.5);
        assert_eq!(parsed.routes[0].duration, 1823.0);
    }

    #[test]
    fn parses_no_route_response() {
        let body = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let parsed: OsrmResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code, "NoRoute");
        assert!(parsed.routes.is_empty());
    }
}
