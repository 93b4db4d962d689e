//! OSRM routing client.
//!
//! Wraps the external routing service behind the one contract the planner
//! needs: two coordinates in, one polyline with distance and duration out.

mod client;
mod error;
mod types;

pub use client::{OsrmClient, OsrmConfig, RouteSummary};
pub use error::OsrmError;
pub use types::{OsrmGeometry, OsrmResponse, OsrmRoute};
