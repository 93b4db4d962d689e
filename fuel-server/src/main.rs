use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fuel_server::cache::{CachedGeocoder, GeocodeCacheConfig};
use fuel_server::geocode::{GeocodeClient, GeocodeConfig};
use fuel_server::osrm::{OsrmClient, OsrmConfig};
use fuel_server::planner::PlannerConfig;
use fuel_server::stations::StationCatalog;
use fuel_server::web::{AppState, create_router};

/// Default station price list path, next to the binary's working directory.
const DEFAULT_STATIONS_FILE: &str = "fuel-prices.csv";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get the geocoding key from the environment
    let api_key = std::env::var("LOCATIONIQ_KEY").unwrap_or_else(|_| {
        warn!("LOCATIONIQ_KEY not set; geocoding calls will fail");
        String::new()
    });

    // Load the station catalog (fail fast if unusable)
    let stations_file =
        std::env::var("STATIONS_FILE").unwrap_or_else(|_| DEFAULT_STATIONS_FILE.to_string());
    let catalog =
        StationCatalog::load(&stations_file).expect("Failed to load the station price list");
    info!(count = catalog.len(), file = %stations_file, "loaded station catalog");

    // Build the upstream clients
    let geocoder =
        GeocodeClient::new(GeocodeConfig::new(api_key)).expect("Failed to create geocoding client");
    let geocoder = CachedGeocoder::new(geocoder, &GeocodeCacheConfig::default());
    let osrm = OsrmClient::new(OsrmConfig::default()).expect("Failed to create routing client");

    // Build app state with the fixed vehicle profile
    let state = AppState::new(geocoder, osrm, catalog, PlannerConfig::default());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    info!("Fuel Route Planner listening on http://{addr}");
    info!("POST /api/route with {{\"start\": ..., \"finish\": ...}} to plan a trip");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
