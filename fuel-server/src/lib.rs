//! Fuel route planner server.
//!
//! A web service that answers: "driving from here to there in the USA,
//! where should I buy fuel to spend the least?"

pub mod cache;
pub mod domain;
pub mod geocode;
pub mod osrm;
pub mod planner;
pub mod stations;
pub mod web;
