//! Priced fuel stations.

use super::RoutePoint;

/// A fuel station from the static price list.
///
/// Stations are created once at catalog load and read-only afterward.
/// The catalog guarantees that coordinates and price are finite and that
/// the price is positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station name as it appears in the price list.
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Price in dollars per gallon.
    pub price_per_gallon: f64,
}

impl Station {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64, price_per_gallon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            price_per_gallon,
        }
    }

    /// The station's position in route-geometry axis order.
    pub fn position(&self) -> RoutePoint {
        RoutePoint::new(self.lon, self.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_axis_order() {
        let s = Station::new("Pilot #44", 35.0, -101.0, 3.15);
        let p = s.position();
        assert_eq!(p.lon, -101.0);
        assert_eq!(p.lat, 35.0);
    }
}
