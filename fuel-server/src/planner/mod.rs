//! Fuel stop planning.
//!
//! This module implements the core planning pipeline that answers:
//! "given this route and these priced stations, where should the vehicle
//! refuel to finish the trip as cheaply as possible?"
//!
//! Two pure stages: [`project`] positions catalog stations on the route's
//! cumulative-distance axis, and [`select`] runs a greedy forward scan
//! over that axis, buying at the cheapest reachable station that does not
//! strand the vehicle.

mod config;
mod error;
mod project;
mod select;

pub use config::PlannerConfig;
pub use error::PlanError;
pub use project::{ProjectedStation, project};
pub use select::select;
