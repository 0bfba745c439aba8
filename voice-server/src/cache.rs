//! Caching layer for directions lookups.
//!
//! Route resolution is the slowest stage of the pipeline, and users retry
//! the same origin/destination pair often (re-asking after mishearing, or
//! switching languages). Entries expire after a short TTL so departure
//! times stay fresh.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::directions::{DirectionsError, RouteSource};
use crate::domain::TransitResult;

/// Cache key: (origin, destination), case-folded and trimmed so that
/// "Majestic" and "majestic " share an entry.
type RouteKey = (String, String);

/// Cached route entry.
type RouteEntry = Arc<Vec<TransitResult>>;

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Route source with caching.
///
/// Wraps any [`RouteSource`] and caches its successful results. Errors are
/// never cached; a failed lookup is retried on the next request.
pub struct CachedDirectionsClient<S> {
    inner: S,
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl<S> CachedDirectionsClient<S> {
    /// Create a new cached client around an inner route source.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, routes }
    }

    /// Compute the cache key for a pair.
    fn key(origin: &str, destination: &str) -> RouteKey {
        (
            origin.trim().to_lowercase(),
            destination.trim().to_lowercase(),
        )
    }

    /// Access the underlying source for operations that bypass the cache.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get cache statistics.
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

impl<S: RouteSource + Sync> CachedDirectionsClient<S> {
    /// Resolve bus routes for a pair, using the cache if possible.
    pub async fn bus_routes_shared(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteEntry, DirectionsError> {
        let key = Self::key(origin, destination);

        if let Some(cached) = self.routes.get(&key).await {
            return Ok(cached);
        }

        let results = self.inner.bus_routes(origin, destination).await?;
        let entry = Arc::new(results);

        self.routes.insert(key, entry.clone()).await;

        Ok(entry)
    }
}

impl<S: RouteSource + Sync> RouteSource for CachedDirectionsClient<S> {
    async fn bus_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<TransitResult>, DirectionsError> {
        let entry = self.bus_routes_shared(origin, destination).await?;
        Ok(entry.as_ref().clone())
    }
}
