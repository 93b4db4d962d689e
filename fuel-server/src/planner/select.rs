//! Greedy fuel stop selection.
//!
//! Forward scan over the route's distance axis: while the destination is
//! out of reach, buy fuel at the cheapest station the current tank can
//! reach. The catch is that the cheapest reachable station may itself be a
//! dead end, so a candidate only qualifies if a full tank at its position
//! reaches the next station or the destination. Without that check the
//! greedy choice can strand the vehicle in a gap longer than its range.

use crate::domain::{FuelStop, VehicleProfile};

use super::error::PlanError;
use super::project::ProjectedStation;

/// Select refueling stops for a route.
///
/// `projected` must be ordered by distance along the route (the projector
/// guarantees this). Returns stops in travel order, at most one per
/// station, each with a positive purchase.
///
/// Pure function: identical inputs give identical output.
pub fn select(
    projected: &[ProjectedStation],
    total_distance_miles: f64,
    vehicle: &VehicleProfile,
) -> Result<Vec<FuelStop>, PlanError> {
    let max_range = vehicle.max_range_miles;

    let mut position = 0.0;
    let mut fuel_miles = max_range;
    let mut visited = vec![false; projected.len()];
    let mut stops = Vec::new();

    while position + fuel_miles < total_distance_miles {
        let window_end = position + fuel_miles;

        // Stations the current tank can reach. Anything at or behind the
        // current position is already passed.
        let in_window = |i: usize, s: &ProjectedStation| {
            !visited[i]
                && s.distance_along_route_miles > position
                && s.distance_along_route_miles <= window_end
        };

        // Cheapest safe candidate; ties on price go to the farthest
        // station, which postpones the next mandatory stop.
        let chosen = projected
            .iter()
            .enumerate()
            .filter(|(i, s)| in_window(*i, s))
            .filter(|(_, s)| can_continue_from(s, projected, total_distance_miles, max_range))
            .min_by(|(_, a), (_, b)| {
                a.station
                    .price_per_gallon
                    .total_cmp(&b.station.price_per_gallon)
                    .then(
                        b.distance_along_route_miles
                            .total_cmp(&a.distance_along_route_miles),
                    )
            });

        let Some((idx, stop_at)) = chosen else {
            // Either the window holds no station at all, or every station
            // in it is a dead end. The gap starts at the farthest point a
            // refuel could still happen.
            let gap_start_miles = projected
                .iter()
                .enumerate()
                .filter(|(i, s)| in_window(*i, s))
                .map(|(_, s)| s.distance_along_route_miles)
                .fold(position, f64::max);
            return Err(PlanError::InfeasibleRoute { gap_start_miles });
        };

        let distance = stop_at.distance_along_route_miles;
        let arrival_fuel = fuel_miles - (distance - position);
        let remaining_to_destination = total_distance_miles - distance;

        // Final stop buys the minimum to finish; an intermediate stop
        // fills the tank. Both amounts are strictly positive: the loop
        // only runs when the destination is out of reach.
        let refuel_miles = if remaining_to_destination <= max_range {
            remaining_to_destination - arrival_fuel
        } else {
            max_range - arrival_fuel
        };

        stops.push(FuelStop::new(
            stop_at.station.clone(),
            distance,
            vehicle.gallons_for(refuel_miles),
        ));

        visited[idx] = true;
        position = distance;
        fuel_miles = arrival_fuel + refuel_miles;
    }

    Ok(stops)
}

/// Whether a full tank at `s` reaches the next station or the destination.
fn can_continue_from(
    s: &ProjectedStation,
    projected: &[ProjectedStation],
    total_distance_miles: f64,
    max_range: f64,
) -> bool {
    let reach = s.distance_along_route_miles + max_range;
    if total_distance_miles <= reach {
        return true;
    }
    projected.iter().any(|t| {
        t.distance_along_route_miles > s.distance_along_route_miles
            && t.distance_along_route_miles <= reach
    })
}
