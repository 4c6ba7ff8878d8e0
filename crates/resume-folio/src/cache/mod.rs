//! Cache gateway for serialized profiles
//!
//! The gateway is trait-based so the server can run against Redis, an
//! in-process map, or no cache at all.

pub mod memory;
pub mod redis_store;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{CacheBackend, CacheConfig};
use crate::error::Result;

pub use memory::{CacheStats, MemoryCache};
pub use redis_store::RedisCache;

/// Outcome of a cache read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    /// Value present and not expired
    Hit(String),
    /// No value stored under the key
    Miss,
    /// Backend could not be reached or errored
    Unavailable(String),
}

/// Trait for key-value caches with expiry
///
/// Implementations:
/// - `RedisCache`: Redis over a tokio connection manager
/// - `MemoryCache`: In-process map
/// - `DisabledCache`: No caching
#[async_trait]
pub trait ProfileCache: Send + Sync {
    /// Read a value
    async fn get(&self, key: &str) -> CacheLookup;

    /// Store a value that expires after `ttl`
    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> Result<bool>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Cache that never stores anything
///
/// Reads always miss and stores are accepted and dropped, so a disabled
/// cache is a normal configuration rather than a fault.
#[derive(Debug, Default)]
pub struct DisabledCache;

#[async_trait]
impl ProfileCache for DisabledCache {
    async fn get(&self, _key: &str) -> CacheLookup {
        CacheLookup::Miss
    }

    async fn set_with_ttl(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

/// Create the cache backend selected in the configuration
///
/// A Redis client that cannot even be constructed (bad URL) degrades to
/// [`DisabledCache`]; an unreachable server is handled per request.
pub async fn connect(config: &CacheConfig) -> Arc<dyn ProfileCache> {
    match config.backend {
        CacheBackend::Redis => match RedisCache::new(config) {
            Ok(cache) => {
                match cache.health_check().await {
                    Ok(true) => tracing::info!("Redis reachable at {}", cache.address()),
                    _ => tracing::warn!(
                        "Redis not reachable at {}, will retry on each request",
                        cache.address()
                    ),
                }
                Arc::new(cache)
            }
            Err(e) => {
                tracing::warn!("Redis client unavailable ({}), caching disabled", e);
                Arc::new(DisabledCache)
            }
        },
        CacheBackend::Memory => {
            tracing::info!("Using in-memory profile cache");
            Arc::new(MemoryCache::new())
        }
        CacheBackend::Disabled => {
            tracing::info!("Profile caching disabled");
            Arc::new(DisabledCache)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_cache() {
        let cache = DisabledCache;
        assert!(cache
            .set_with_ttl("k", "v", Duration::from_secs(1))
            .await
            .is_ok());
        assert_eq!(cache.get("k").await, CacheLookup::Miss);
        assert!(!cache.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_connect_memory_backend() {
        let config = CacheConfig {
            backend: CacheBackend::Memory,
            ..Default::default()
        };
        let cache = connect(&config).await;
        assert_eq!(cache.name(), "memory");
    }
}
