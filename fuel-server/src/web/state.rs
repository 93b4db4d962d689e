//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGeocoder;
use crate::osrm::OsrmClient;
use crate::planner::PlannerConfig;
use crate::stations::StationCatalog;

/// Shared application state.
///
/// Contains all the services needed to handle requests. The catalog and
/// config are read-only after startup, so sharing needs no locking.
#[derive(Clone)]
pub struct AppState {
    /// Cached geocoding client
    pub geocoder: Arc<CachedGeocoder>,

    /// Routing client
    pub osrm: Arc<OsrmClient>,

    /// Static station price catalog
    pub catalog: Arc<StationCatalog>,

    /// Planner configuration (vehicle profile and proximity threshold)
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        geocoder: CachedGeocoder,
        osrm: OsrmClient,
        catalog: StationCatalog,
        config: PlannerConfig,
    ) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            osrm: Arc::new(osrm),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
