//! The assembled trip plan.

use super::{DomainError, FuelStop, RoutePoint, VehicleProfile};

/// A complete fuel plan for one trip.
///
/// Assembled once from the route geometry and the selector's stops;
/// never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    /// Route polyline in travel order.
    pub geometry: Vec<RoutePoint>,

    /// Total route length in miles (polyline cumulative sum).
    pub total_distance_miles: f64,

    /// Total driving duration in seconds, as reported by the router.
    pub total_duration_secs: f64,

    /// Refueling stops in travel order.
    pub stops: Vec<FuelStop>,

    /// Fuel consumed over the whole trip, in gallons.
    pub total_gallons: f64,

    /// Sum of all stop costs, in dollars.
    pub total_cost: f64,
}

impl TripPlan {
    /// Assemble a plan from its parts.
    ///
    /// Pure aggregation: `total_gallons` is consumption over the whole
    /// distance and `total_cost` is the sum of stop costs. Fails only on
    /// internally inconsistent inputs.
    pub fn assemble(
        geometry: Vec<RoutePoint>,
        total_distance_miles: f64,
        total_duration_secs: f64,
        stops: Vec<FuelStop>,
        vehicle: &VehicleProfile,
    ) -> Result<Self, DomainError> {
        if geometry.is_empty() {
            return Err(DomainError::EmptyGeometry);
        }
        if total_distance_miles < 0.0 {
            return Err(DomainError::NegativeDistance(total_distance_miles));
        }
        if total_duration_secs < 0.0 {
            return Err(DomainError::NegativeDuration(total_duration_secs));
        }

        let total_gallons = vehicle.gallons_for(total_distance_miles);
        let total_cost = stops.iter().map(|s| s.cost).sum();

        Ok(Self {
            geometry,
            total_distance_miles,
            total_duration_secs,
            stops,
            total_gallons,
            total_cost,
        })
    }
}
