//! Application state for the resume server

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{self, ProfileCache};
use crate::config::FolioConfig;
use crate::service::ResumeService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: FolioConfig,
    /// Profile service (owns the cache handle)
    service: ResumeService,
}

impl AppState {
    /// Create state, connecting the configured cache backend once
    pub async fn new(config: FolioConfig) -> Self {
        tracing::info!(
            "Initializing resume state (cache backend: {:?})...",
            config.cache.backend
        );
        let cache = cache::connect(&config.cache).await;
        Self::with_cache(config, cache)
    }

    /// Create state over an existing cache
    pub fn with_cache(config: FolioConfig, cache: Arc<dyn ProfileCache>) -> Self {
        let service = ResumeService::new(cache, &config.cache, &config.resume);
        tracing::info!("Resume sources: {:?}", config.resume.paths);

        Self {
            inner: Arc::new(AppStateInner { config, service }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &FolioConfig {
        &self.inner.config
    }

    /// Get profile service
    pub fn service(&self) -> &ResumeService {
        &self.inner.service
    }

    /// Get cache backend
    pub fn cache(&self) -> &Arc<dyn ProfileCache> {
        self.inner.service.cache()
    }

    /// Photo URL for the page: the local photo if present, else the placeholder
    pub fn photo_url(&self) -> String {
        let local: PathBuf = self.inner.config.resume.static_dir.join("photo.jpg");
        if local.exists() {
            "/static/photo.jpg".to_string()
        } else {
            self.inner.config.resume.placeholder_photo_url.clone()
        }
    }
}
