//! Planner configuration.

use crate::domain::VehicleProfile;

/// Configuration parameters for fuel stop planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// The fixed vehicle profile (range and fuel economy).
    pub vehicle: VehicleProfile,

    /// Maximum perpendicular distance from the route, in miles, for a
    /// station to count as a candidate. Stations farther out than this
    /// are not realistic detours.
    pub station_proximity_miles: f64,
}

impl PlannerConfig {
    pub fn new(vehicle: VehicleProfile, station_proximity_miles: f64) -> Self {
        Self {
            vehicle,
            station_proximity_miles,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            vehicle: VehicleProfile::default(),
            station_proximity_miles: 30.0,
        }
    }
}
