//! In-process cache with per-entry expiry

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;

use super::{CacheLookup, ProfileCache};
use crate::error::Result;

#[derive(Debug, Clone)]
struct CachedEntry {
    value: String,
    cached_at: DateTime<Utc>,
    ttl: Duration,
    hit_count: u32,
}

impl CachedEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(self.cached_at);
        age.to_std().map(|age| age >= self.ttl).unwrap_or(false)
    }
}

/// Map-backed cache, useful without Redis and in tests
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CachedEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read();
        CacheStats {
            entries: entries.len(),
            total_hits: entries.values().map(|e| e.hit_count).sum(),
        }
    }
}

#[async_trait]
impl ProfileCache for MemoryCache {
    async fn get(&self, key: &str) -> CacheLookup {
        let mut entries = self.entries.write();

        if let Some(entry) = entries.get_mut(key) {
            if entry.is_expired(Utc::now()) {
                tracing::debug!("Cache miss (TTL expired): {}", key);
                entries.remove(key);
                return CacheLookup::Miss;
            }
            entry.hit_count += 1;
            return CacheLookup::Hit(entry.value.clone());
        }

        CacheLookup::Miss
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        self.entries.write().insert(
            key.to_string(),
            CachedEntry {
                value: value.to_string(),
                cached_at: Utc::now(),
                ttl,
                hit_count: 0,
            },
        );
        Ok(())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Cache statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub total_hits: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_hit() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("resume_content").await, CacheLookup::Miss);

        cache
            .set_with_ttl("resume_content", "{}", Duration::from_secs(300))
            .await
            .unwrap();

        assert_eq!(
            cache.get("resume_content").await,
            CacheLookup::Hit("{}".to_string())
        );
        assert_eq!(cache.stats().total_hits, 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_expires() {
        let cache = MemoryCache::new();
        cache
            .set_with_ttl("k", "v", Duration::from_secs(0))
            .await
            .unwrap();

        assert_eq!(cache.get("k").await, CacheLookup::Miss);
        assert_eq!(cache.stats().entries, 0);
    }
}
