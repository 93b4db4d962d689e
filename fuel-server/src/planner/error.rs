//! Planning error types.

/// Errors from fuel stop planning.
///
/// Both variants are domain-level failures: the request was well-formed
/// and the upstream services answered, but no valid plan exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// No candidate stations near the route on a trip that needs refueling
    #[error(
        "no fuel stations within {proximity_miles} miles of the route; \
         the trip is {total_distance_miles:.1} miles and the vehicle's range is \
         {max_range_miles} miles"
    )]
    NoStationsNearRoute {
        proximity_miles: f64,
        total_distance_miles: f64,
        max_range_miles: f64,
    },

    /// A gap between consecutive reachable points exceeds the vehicle's range
    #[error(
        "route is infeasible: no fuel station is reachable after mile {gap_start_miles:.1}"
    )]
    InfeasibleRoute { gap_start_miles: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_message_names_gap_start() {
        let err = PlanError::InfeasibleRoute {
            gap_start_miles: 612.34,
        };
        assert!(err.to_string().contains("mile 612.3"));
    }

    #[test]
    fn no_stations_message_names_range() {
        let err = PlanError::NoStationsNearRoute {
            proximity_miles: 30.0,
            total_distance_miles: 1200.0,
            max_range_miles: 500.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("30 miles"));
        assert!(msg.contains("1200.0 miles"));
        assert!(msg.contains("500 miles"));
    }
}
