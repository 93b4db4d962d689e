//! Route geometry primitives.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.7613;

/// Meters per statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;

/// A point on a route polyline, in GeoJSON axis order (longitude first).
///
/// A `Vec<RoutePoint>` describes the path; insertion order is travel order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lon: f64,
    pub lat: f64,
}

impl RoutePoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Great-circle distance between two points in miles.
pub fn haversine_miles(a: RoutePoint, b: RoutePoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Cumulative distance along a polyline, in miles.
///
/// Returns one entry per point; the first is 0 and the last is the total
/// length of the polyline. Empty input yields an empty vector.
pub fn cumulative_miles(points: &[RoutePoint]) -> Vec<f64> {
    let mut cum = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            total += haversine_miles(points[i - 1], *point);
        }
        cum.push(total);
    }
    cum
}
