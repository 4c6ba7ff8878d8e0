//! Request orchestration: cache lookup, rebuild on miss, cache store

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheLookup, ProfileCache};
use crate::config::{CacheConfig, ResumeConfig};
use crate::error::{Error, Result};
use crate::extraction::ProfileExtractor;
use crate::ingestion::merge_documents;
use crate::types::Profile;

/// Serves the resume profile, rebuilding it from documents on cache miss
pub struct ResumeService {
    cache: Arc<dyn ProfileCache>,
    cache_key: String,
    ttl: Duration,
    paths: Vec<String>,
}

impl ResumeService {
    /// Create a service over an already connected cache
    pub fn new(cache: Arc<dyn ProfileCache>, cache_config: &CacheConfig, resume: &ResumeConfig) -> Self {
        Self {
            cache,
            cache_key: cache_config.key.clone(),
            ttl: Duration::from_secs(cache_config.ttl_secs),
            paths: resume.paths.clone(),
        }
    }

    /// Cache backend in use
    pub fn cache(&self) -> &Arc<dyn ProfileCache> {
        &self.cache
    }

    /// Get the profile, from cache when possible
    ///
    /// Cache failures never fail the request: an unavailable cache is
    /// treated as a miss and a failed store is only logged.
    pub async fn get_profile(&self) -> Result<Profile> {
        match self.cache.get(&self.cache_key).await {
            CacheLookup::Hit(raw) => match Profile::from_json(&raw) {
                Ok(profile) => {
                    tracing::debug!("Cache hit: {}", self.cache_key);
                    return Ok(profile);
                }
                Err(e) => {
                    tracing::warn!("Discarding unreadable cached profile: {}", e);
                }
            },
            CacheLookup::Miss => {
                tracing::debug!("Cache miss: {}", self.cache_key);
            }
            CacheLookup::Unavailable(reason) => {
                tracing::warn!("Cache {} unavailable: {}", self.cache.name(), reason);
            }
        }

        let paths = resolve_paths(&self.paths);
        let profile = tokio::task::spawn_blocking(move || build_profile(&paths))
            .await
            .map_err(|e| Error::internal(format!("Profile extraction task failed: {}", e)))?;

        self.store(&profile).await;
        Ok(profile)
    }

    async fn store(&self, profile: &Profile) {
        let json = match profile.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize profile for cache: {}", e);
                return;
            }
        };

        match self.cache.set_with_ttl(&self.cache_key, &json, self.ttl).await {
            Ok(()) => tracing::info!(
                "Cached profile under {} for {}s",
                self.cache_key,
                self.ttl.as_secs()
            ),
            Err(e) => tracing::warn!("Failed to cache profile: {}", e),
        }
    }
}

/// Keep configured paths that exist; if none do, keep them all
///
/// Falling back to the full list lets the reader report each missing file
/// through its placeholder paragraph.
pub fn resolve_paths(paths: &[String]) -> Vec<String> {
    let existing: Vec<String> = paths
        .iter()
        .filter(|p| Path::new(p.as_str()).exists())
        .cloned()
        .collect();

    if existing.is_empty() {
        paths.to_vec()
    } else {
        existing
    }
}

/// Merge the documents and classify the result
pub fn build_profile<S: AsRef<str>>(paths: &[S]) -> Profile {
    let merged = merge_documents(paths);
    tracing::debug!(
        "Merged {} paragraphs (title: {:?})",
        merged.paragraphs.len(),
        merged.title
    );
    ProfileExtractor::extract(&merged)
}
