//! Caching layer for geocoding responses.
//!
//! The endpoints of popular trips repeat, and a place name's coordinates
//! do not move. Caching the LocationIQ lookups keeps repeated requests off
//! the provider's rate limits. Errors are never cached.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::geocode::{Coordinates, GeocodeClient, GeocodeError};

/// Configuration for the geocode cache.
#[derive(Debug, Clone)]
pub struct GeocodeCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for GeocodeCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Geocoding client with response caching.
///
/// Wraps a [`GeocodeClient`] and caches successful lookups keyed by the
/// normalized address.
pub struct CachedGeocoder {
    client: GeocodeClient,
    cache: MokaCache<String, Coordinates>,
}

impl CachedGeocoder {
    /// Create a new cached geocoder.
    pub fn new(client: GeocodeClient, config: &GeocodeCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, cache }
    }

    /// Resolve an address, using the cache if available.
    pub async fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let key = cache_key(address);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let coords = self.client.geocode(address).await?;
        self.cache.insert(key, coords).await;

        Ok(coords)
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &GeocodeClient {
        &self.client
    }
}

/// Normalize an address for use as a cache key.
///
/// Trailing whitespace and letter case carry no geographic information,
/// so "Chicago, IL" and " chicago, il " share an entry.
fn cache_key(address: &str) -> String {
    address.trim().to_lowercase()
}
