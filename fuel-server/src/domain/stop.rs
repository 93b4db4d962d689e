//! Chosen refueling stops.

use super::Station;

/// A refueling stop chosen by the planner.
///
/// Produced only by the stop selector; at most one stop per station.
/// `gallons` is always positive and `cost = gallons × price_per_gallon`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStop {
    /// The station to stop at.
    pub station: Station,

    /// The station's position as cumulative miles along the route.
    pub distance_along_route_miles: f64,

    /// Gallons purchased at this stop.
    pub gallons: f64,

    /// Purchase cost in dollars.
    pub cost: f64,
}

impl FuelStop {
    pub fn new(station: Station, distance_along_route_miles: f64, gallons: f64) -> Self {
        let cost = gallons * station.price_per_gallon;
        Self {
            station,
            distance_along_route_miles,
            gallons,
            cost,
        }
    }
}
