//! Configuration for the resume server

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Resume files read when `RESUME_PATHS` is not set
pub const DEFAULT_RESUME_PATHS: &str = "Hassan_Khan_resume.docx,Resume.docx";

/// Main server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Resume sources and static assets
    #[serde(default)]
    pub resume: ResumeConfig,
}

impl FolioConfig {
    /// Load configuration: optional TOML file named by `FOLIO_CONFIG`,
    /// then environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("FOLIO_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<()> {
        // Redis rejects SETEX with a zero expiry
        if self.cache.ttl_secs == 0 {
            return Err(Error::Config("cache.ttl_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Read a TOML configuration file
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path, e)))?;
        toml::from_str(&raw).map_err(|e| Error::Config(format!("Invalid {}: {}", path, e)))
    }

    /// Apply environment overrides from a lookup function
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("REDIS_HOST") {
            self.cache.redis_host = host;
        }
        if let Some(port) = lookup("REDIS_PORT") {
            self.cache.redis_port = parse_port("REDIS_PORT", &port)?;
        }
        if let Some(backend) = lookup("FOLIO_CACHE_BACKEND") {
            self.cache.backend = backend.parse()?;
        }
        if let Some(paths) = lookup("RESUME_PATHS") {
            self.resume.paths = parse_path_list(&paths);
        }
        if let Some(dir) = lookup("FOLIO_STATIC_DIR") {
            self.resume.static_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup("FOLIO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FOLIO_PORT") {
            self.server.port = parse_port("FOLIO_PORT", &port)?;
        }
        Ok(())
    }
}

fn parse_port(name: &str, raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("{} must be a port number, got {:?}: {}", name, raw, e)))
}

/// Split a comma-separated path list, dropping blank entries
pub fn parse_path_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
        }
    }
}

/// Cache backend selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Redis server
    #[default]
    Redis,
    /// In-process map
    Memory,
    /// No caching
    Disabled,
}

impl std::str::FromStr for CacheBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            "disabled" | "none" | "off" => Ok(Self::Disabled),
            other => Err(Error::Config(format!("Unknown cache backend: {}", other))),
        }
    }
}

/// Profile cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Backend provider
    #[serde(default)]
    pub backend: CacheBackend,
    /// Redis host
    pub redis_host: String,
    /// Redis port
    pub redis_port: u16,
    /// Key the serialized profile is stored under
    pub key: String,
    /// Entry lifetime in seconds
    pub ttl_secs: u64,
    /// Upper bound for a single cache round trip, in milliseconds
    pub timeout_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::Redis,
            redis_host: "redis".to_string(),
            redis_port: 6379,
            key: "resume_content".to_string(),
            ttl_secs: 300,
            timeout_ms: 1000,
        }
    }
}

/// Resume sources and page assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeConfig {
    /// Candidate .docx files, in merge order
    pub paths: Vec<String>,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Photo shown when `<static_dir>/photo.jpg` is missing
    pub placeholder_photo_url: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            paths: parse_path_list(DEFAULT_RESUME_PATHS),
            static_dir: PathBuf::from("static"),
            placeholder_photo_url: "https://via.placeholder.com/160".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.cache.redis_host, "redis");
        assert_eq!(config.cache.redis_port, 6379);
        assert_eq!(config.cache.key, "resume_content");
        assert_eq!(config.cache.ttl_secs, 300);
        assert_eq!(
            config.resume.paths,
            vec!["Hassan_Khan_resume.docx", "Resume.docx"]
        );
    }

    #[test]
    fn test_env_overrides() {
        let mut config = FolioConfig::default();
        config
            .apply_env(env(&[
                ("REDIS_HOST", "localhost"),
                ("REDIS_PORT", "6380"),
                ("RESUME_PATHS", " a.docx, ,b.docx ,"),
                ("FOLIO_CACHE_BACKEND", "memory"),
            ]))
            .unwrap();

        assert_eq!(config.cache.redis_host, "localhost");
        assert_eq!(config.cache.redis_port, 6380);
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.resume.paths, vec!["a.docx", "b.docx"]);
    }

    #[test]
    fn test_bad_port_is_config_error() {
        let mut config = FolioConfig::default();
        let err = config
            .apply_env(env(&[("REDIS_PORT", "not-a-port")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_toml_partial_file() {
        let config: FolioConfig = toml::from_str(
            r#"
            [resume]
            paths = ["cv.docx"]
            static_dir = "public"
            placeholder_photo_url = "https://example.com/me.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.resume.paths, vec!["cv.docx"]);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.cache.backend, CacheBackend::Redis);
    }

    #[test]
    fn test_zero_ttl_is_rejected() {
        let mut config: FolioConfig = toml::from_str(
            r#"
            [cache]
            redis_host = "localhost"
            redis_port = 6379
            key = "resume_content"
            ttl_secs = 0
            timeout_ms = 500
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("ttl_secs")));

        config.cache.ttl_secs = 1;
        assert!(config.validate().is_ok());
        assert!(FolioConfig::default().validate().is_ok());
    }
}
