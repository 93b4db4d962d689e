//! Web layer for the fuel route planner.
//!
//! Provides the HTTP endpoint that turns two addresses into a trip plan,
//! plus a health check and an HTML index page.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
