//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{DomainError, TripPlan, cumulative_miles};
use crate::geocode::GeocodeError;
use crate::osrm::OsrmError;
use crate::planner::{PlanError, project, select};

use super::dto::*;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/route", post(plan_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page describing the API.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let template = IndexTemplate {
        max_range_miles: state.config.vehicle.max_range_miles,
        mpg: state.config.vehicle.mpg,
        station_count: state.catalog.len(),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Plan a fuel route between two addresses.
async fn plan_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanRouteResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(body = %String::from_utf8_lossy(&body), "invalid plan request: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let start = req.start.trim();
    let finish = req.finish.trim();
    if start.is_empty() || finish.is_empty() {
        return Err(AppError::BadRequest {
            message: "start and finish are required".to_string(),
        });
    }

    // The two endpoint lookups are independent; run them together.
    let (origin, destination) = tokio::join!(
        state.geocoder.geocode(start),
        state.geocoder.geocode(finish)
    );
    let origin = origin?;
    let destination = destination?;

    // Exactly one routing call per request.
    let route = state.osrm.route(origin, destination).await?;

    // The planning axis is the polyline's own cumulative length, so stop
    // positions and totals are mutually consistent.
    let cum = cumulative_miles(&route.geometry);
    let total_distance_miles = cum.last().copied().unwrap_or(0.0);
    tracing::debug!(
        polyline_miles = total_distance_miles,
        osrm_miles = route.distance_miles,
        "route received"
    );

    let projected = project(
        state.catalog.stations(),
        &route.geometry,
        total_distance_miles,
        &state.config,
    )?;
    let stops = select(&projected, total_distance_miles, &state.config.vehicle)?;

    let plan = TripPlan::assemble(
        route.geometry,
        total_distance_miles,
        route.duration_secs,
        stops,
        &state.config.vehicle,
    )?;

    let start = EndpointResult {
        address: start.to_string(),
        lat: origin.lat,
        lon: origin.lon,
    };
    let finish = EndpointResult {
        address: finish.to_string(),
        lat: destination.lat,
        lon: destination.lon,
    };

    Ok(Json(PlanRouteResponse::from_plan(&plan, start, finish)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request or unresolvable address (4xx)
    BadRequest { message: String },

    /// Well-formed request with no valid plan (4xx)
    Unprocessable { message: String },

    /// An upstream service failed (502)
    Upstream { message: String },

    /// Internal inconsistency (500)
    Internal { message: String },
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::AddressNotFound(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            _ => AppError::Upstream {
                message: format!("geocoding failed: {e}"),
            },
        }
    }
}

impl From<OsrmError> for AppError {
    fn from(e: OsrmError) -> Self {
        AppError::Upstream {
            message: format!("routing failed: {e}"),
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::Unprocessable {
            message: e.to_string(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Unprocessable { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_not_found_maps_to_bad_request() {
        let err = AppError::from(GeocodeError::AddressNotFound("Nowhere".into()));
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn geocode_rate_limit_maps_to_upstream() {
        let err = AppError::from(GeocodeError::RateLimited);
        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[test]
    fn osrm_failure_maps_to_upstream() {
        let err = AppError::from(OsrmError::NoRoute);
        match err {
            AppError::Upstream { message } => assert!(message.contains("routing failed")),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn plan_failure_maps_to_unprocessable() {
        let err = AppError::from(PlanError::InfeasibleRoute {
            gap_start_miles: 480.0,
        });
        match err {
            AppError::Unprocessable { message } => assert!(message.contains("480.0")),
            other => panic!("expected Unprocessable, got {other:?}"),
        }
    }

    #[test]
    fn domain_failure_maps_to_internal() {
        let err = AppError::from(DomainError::NegativeDistance(-1.0));
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
