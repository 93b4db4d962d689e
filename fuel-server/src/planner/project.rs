//! Station projection onto the route's distance axis.
//!
//! Maps each catalog station to the cumulative-miles position of its
//! nearest point on the route polyline. Only stations close enough to the
//! route survive; everything else is not a realistic refueling candidate.

use crate::domain::{RoutePoint, Station, cumulative_miles};

use super::config::PlannerConfig;
use super::error::PlanError;

/// Mean Earth radius in miles, for the local-plane approximation.
const EARTH_RADIUS_MILES: f64 = 3958.7613;

/// A station positioned on the route's cumulative-distance axis.
///
/// Derived per request; the route differs each time, so projections are
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedStation {
    pub station: Station,

    /// Cumulative miles along the route to the nearest point on it.
    pub distance_along_route_miles: f64,

    /// Perpendicular distance from the station to the route, in miles.
    pub offset_miles: f64,
}

/// Project stations onto the route.
///
/// Pure function of its inputs. The result is ordered by distance along
/// the route ascending, with co-located stations ordered cheaper first.
///
/// Fails with [`PlanError::NoStationsNearRoute`] when nothing projects
/// within the proximity threshold and the trip is too long to finish on
/// the starting tank.
pub fn project(
    stations: &[Station],
    route_points: &[RoutePoint],
    total_distance_miles: f64,
    config: &PlannerConfig,
) -> Result<Vec<ProjectedStation>, PlanError> {
    let cum = cumulative_miles(route_points);

    let mut projected: Vec<ProjectedStation> = stations
        .iter()
        .filter_map(|station| {
            let (along, offset) = nearest_on_route(station.position(), route_points, &cum)?;
            if offset > config.station_proximity_miles {
                return None;
            }
            Some(ProjectedStation {
                station: station.clone(),
                distance_along_route_miles: along.clamp(0.0, total_distance_miles),
                offset_miles: offset,
            })
        })
        .collect();

    if projected.is_empty() && total_distance_miles > config.vehicle.max_range_miles {
        return Err(PlanError::NoStationsNearRoute {
            proximity_miles: config.station_proximity_miles,
            total_distance_miles,
            max_range_miles: config.vehicle.max_range_miles,
        });
    }

    projected.sort_by(|a, b| {
        a.distance_along_route_miles
            .total_cmp(&b.distance_along_route_miles)
            .then(
                a.station
                    .price_per_gallon
                    .total_cmp(&b.station.price_per_gallon),
            )
    });

    Ok(projected)
}

/// Nearest point on the polyline to `point`.
///
/// Returns `(cumulative_miles_at_nearest, offset_miles)`, or `None` when
/// the polyline has no segments.
///
/// Each segment is treated as a straight line in a local equirectangular
/// plane (longitude scaled by cos latitude). Good to well under a mile at
/// the segment lengths a driving polyline has, which is all the proximity
/// filter needs.
fn nearest_on_route(
    point: RoutePoint,
    route_points: &[RoutePoint],
    cum: &[f64],
) -> Option<(f64, f64)> {
    if route_points.len() < 2 {
        return None;
    }

    let mut best: Option<(f64, f64)> = None;

    for i in 0..route_points.len() - 1 {
        let a = route_points[i];
        let b = route_points[i + 1];

        let scale = a.lat.to_radians().cos();
        let bx = (b.lon - a.lon).to_radians() * scale * EARTH_RADIUS_MILES;
        let by = (b.lat - a.lat).to_radians() * EARTH_RADIUS_MILES;
        let px = (point.lon - a.lon).to_radians() * scale * EARTH_RADIUS_MILES;
        let py = (point.lat - a.lat).to_radians() * EARTH_RADIUS_MILES;

        let seg_len_sq = bx * bx + by * by;
        let t = if seg_len_sq > 0.0 {
            ((px * bx + py * by) / seg_len_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let dx = px - t * bx;
        let dy = py - t * by;
        let offset = (dx * dx + dy * dy).sqrt();

        let along = cum[i] + t * (cum[i + 1] - cum[i]);

        if best.is_none_or(|(_, best_offset)| offset < best_offset) {
            best = Some((along, offset));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleProfile;

    /// A straight east-west route at 40°N, roughly 53 miles per point.
    fn route() -> Vec<RoutePoint> {
        (0..=10)
            .map(|i| RoutePoint::new(-100.0 + i as f64, 40.0))
            .collect()
    }

    fn total(route: &[RoutePoint]) -> f64 {
        *cumulative_miles(route).last().unwrap()
    }

    #[test]
    fn station_on_route_projects_at_its_position() {
        let route = route();
        let total = total(&route);
        let stations = vec![Station::new("Midpoint", 40.0, -95.0, 3.00)];

        let projected = project(&stations, &route, total, &PlannerConfig::default()).unwrap();

        assert_eq!(projected.len(), 1);
        // -95 is exactly half way along the ten-degree route.
        assert!((projected[0].distance_along_route_miles - total / 2.0).abs() < 0.1);
        assert!(projected[0].offset_miles < 0.1);
    }

    #[test]
    fn offset_matches_perpendicular_distance() {
        let route = route();
        let total = total(&route);
        // Half a degree of latitude north of the route, about 34.5 miles.
        let stations = vec![Station::new("North", 40.5, -95.0, 3.00)];

        let config = PlannerConfig::new(VehicleProfile::default(), 40.0);
        let projected = project(&stations, &route, total, &config).unwrap();

        assert_eq!(projected.len(), 1);
        assert!((projected[0].offset_miles - 34.5).abs() < 0.5);
    }

    #[test]
    fn far_station_is_discarded() {
        let route = route();
        let total = total(&route);
        // A full degree north, about 69 miles out: over any sane threshold.
        let stations = vec![
            Station::new("Near", 40.05, -97.0, 3.00),
            Station::new("Far", 41.0, -97.0, 1.00),
        ];

        let projected = project(&stations, &route, total, &PlannerConfig::default()).unwrap();

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].station.name, "Near");
    }

    #[test]
    fn ordered_by_distance_then_price() {
        let route = route();
        let total = total(&route);
        let stations = vec![
            Station::new("LateExpensive", 40.0, -92.0, 3.60),
            Station::new("EarlyDear", 40.0, -98.0, 3.20),
            Station::new("EarlyCheap", 40.0, -98.0, 2.80),
        ];

        let projected = project(&stations, &route, total, &PlannerConfig::default()).unwrap();

        let names: Vec<&str> = projected.iter().map(|p| p.station.name.as_str()).collect();
        assert_eq!(names, ["EarlyCheap", "EarlyDear", "LateExpensive"]);
    }

    #[test]
    fn empty_result_fails_when_trip_needs_fuel() {
        let route = route();
        let total = total(&route);
        assert!(total > 500.0, "route must exceed the default range");

        let err = project(&[], &route, total, &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, PlanError::NoStationsNearRoute { .. }));
    }

    #[test]
    fn empty_result_ok_when_trip_fits_in_tank() {
        let route: Vec<RoutePoint> = vec![
            RoutePoint::new(-100.0, 40.0),
            RoutePoint::new(-99.0, 40.0),
        ];
        let total = total(&route);

        let projected = project(&[], &route, total, &PlannerConfig::default()).unwrap();
        assert!(projected.is_empty());
    }

    #[test]
    fn degenerate_route_has_no_candidates() {
        let route = vec![RoutePoint::new(-100.0, 40.0)];
        let stations = vec![Station::new("Anywhere", 40.0, -100.0, 3.00)];

        let projected = project(&stations, &route, 0.0, &PlannerConfig::default()).unwrap();
        assert!(projected.is_empty());
    }

    #[test]
    fn projection_clamps_to_route_bounds() {
        let route = route();
        let total = total(&route);
        // Past the eastern end of the route; nearest point is the endpoint.
        let stations = vec![Station::new("Beyond", 40.0, -89.8, 3.00)];

        let config = PlannerConfig::new(VehicleProfile::default(), 30.0);
        let projected = project(&stations, &route, total, &config).unwrap();

        assert_eq!(projected.len(), 1);
        assert!(projected[0].distance_along_route_miles <= total);
    }
}
