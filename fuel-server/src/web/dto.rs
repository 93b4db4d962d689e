//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{FuelStop, TripPlan};

/// Request to plan a fuel route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Free-text start address (US)
    pub start: String,

    /// Free-text destination address (US)
    pub finish: String,
}

/// A geocoded trip endpoint, echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct EndpointResult {
    /// The address as given in the request
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

/// One refueling stop in the response.
#[derive(Debug, Serialize)]
pub struct FuelStopResult {
    /// Station name from the price list
    pub location: String,

    /// Price in dollars per gallon
    pub price_per_gallon: f64,

    /// Stop position as cumulative miles along the route
    pub distance_along_route_miles: f64,

    /// Gallons to buy at this stop
    pub gallons: f64,

    /// Purchase cost in dollars
    pub cost: f64,
}

/// Response for route planning.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub start: EndpointResult,
    pub finish: EndpointResult,

    /// Route polyline as `[longitude, latitude]` pairs in travel order
    pub route_geometry: Vec<[f64; 2]>,

    pub total_distance_miles: f64,
    pub total_duration_secs: f64,

    /// Refueling stops in travel order
    pub fuel_stops: Vec<FuelStopResult>,

    pub total_gallons: f64,
    pub total_cost: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl FuelStopResult {
    /// Create from a domain FuelStop.
    pub fn from_stop(stop: &FuelStop) -> Self {
        Self {
            location: stop.station.name.clone(),
            price_per_gallon: stop.station.price_per_gallon,
            distance_along_route_miles: round2(stop.distance_along_route_miles),
            gallons: round3(stop.gallons),
            cost: round2(stop.cost),
        }
    }
}

impl PlanRouteResponse {
    /// Create from an assembled TripPlan and the geocoded endpoints.
    pub fn from_plan(plan: &TripPlan, start: EndpointResult, finish: EndpointResult) -> Self {
        let route_geometry = plan.geometry.iter().map(|p| [p.lon, p.lat]).collect();

        let fuel_stops = plan.stops.iter().map(FuelStopResult::from_stop).collect();

        Self {
            start,
            finish,
            route_geometry,
            total_distance_miles: round2(plan.total_distance_miles),
            total_duration_secs: plan.total_duration_secs,
            fuel_stops,
            total_gallons: round3(plan.total_gallons),
            total_cost: round2(plan.total_cost),
        }
    }
}

/// Round to two decimal places (currency, miles). Display-only: the
/// planner itself works on unrounded values.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to three decimal places (gallons).
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
