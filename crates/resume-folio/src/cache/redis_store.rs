//! Redis-backed profile cache

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use tokio::sync::OnceCell;

use super::{CacheLookup, ProfileCache};
use crate::config::CacheConfig;
use crate::error::{Error, Result};

/// Redis cache shared by all requests
///
/// The connection manager is created on first successful use and reused
/// afterwards; it reconnects on its own once established. Until then every
/// call retries the initial connection, bounded by `op_timeout`.
pub struct RedisCache {
    client: redis::Client,
    manager: OnceCell<ConnectionManager>,
    address: String,
    op_timeout: Duration,
}

impl RedisCache {
    /// Create a client for the configured host and port
    pub fn new(config: &CacheConfig) -> Result<Self> {
        let address = format!("{}:{}", config.redis_host, config.redis_port);
        let client = redis::Client::open(format!("redis://{}/", address))?;

        Ok(Self {
            client,
            manager: OnceCell::new(),
            address,
            op_timeout: Duration::from_millis(config.timeout_ms),
        })
    }

    /// host:port this cache talks to
    pub fn address(&self) -> &str {
        &self.address
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        let manager = self
            .manager
            .get_or_try_init(|| async {
                let connect = ConnectionManager::new(self.client.clone());
                match tokio::time::timeout(self.op_timeout, connect).await {
                    Ok(result) => result.map_err(Error::from),
                    Err(_) => Err(Error::cache(format!("connect to {} timed out", self.address))),
                }
            })
            .await?;
        Ok(manager.clone())
    }

    async fn with_timeout<T, F>(&self, op: &str, fut: F) -> Result<T>
    where
        F: std::future::Future<Output = redis::RedisResult<T>>,
    {
        tokio::time::timeout(self.op_timeout, fut)
            .await
            .map_err(|_| Error::cache(format!("{} timed out after {:?}", op, self.op_timeout)))?
            .map_err(Error::from)
    }
}

#[async_trait]
impl ProfileCache for RedisCache {
    async fn get(&self, key: &str) -> CacheLookup {
        let mut conn = match self.connection().await {
            Ok(conn) => conn,
            Err(e) => return CacheLookup::Unavailable(e.to_string()),
        };

        match self.with_timeout("GET", conn.get::<_, Option<String>>(key)).await {
            Ok(Some(value)) if !value.is_empty() => CacheLookup::Hit(value),
            Ok(_) => CacheLookup::Miss,
            Err(e) => CacheLookup::Unavailable(e.to_string()),
        }
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;
        self.with_timeout("SET", conn.set_ex::<_, _, ()>(key, value, ttl.as_secs()))
            .await
    }

    async fn health_check(&self) -> Result<bool> {
        let mut conn = self.connection().await?;
        let pong: String = self
            .with_timeout("PING", redis::cmd("PING").query_async(&mut conn))
            .await?;
        Ok(pong == "PONG")
    }

    fn name(&self) -> &str {
        "redis"
    }
}
