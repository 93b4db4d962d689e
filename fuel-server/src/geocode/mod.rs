//! LocationIQ geocoding client.
//!
//! Resolves the request's free-text start and finish addresses to
//! coordinates. Each planning request performs exactly one lookup per
//! endpoint (served from the cache when the address repeats); an
//! unresolvable address fails the whole request.

mod client;
mod error;

pub use client::{Coordinates, GeocodeClient, GeocodeConfig};
pub use error::GeocodeError;
