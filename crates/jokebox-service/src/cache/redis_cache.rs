//! Redis-backed cache implementation.

use super::{CacheStore, Expiry};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool, PoolConfig, Runtime};
use jokebox_config::RedisConfig;
use jokebox_core::{JokeboxError, JokeboxResult};
use tracing::debug;

/// Redis-backed cache store.
pub struct RedisCacheStore {
    pool: Pool,
}

impl RedisCacheStore {
    /// Creates a new Redis cache store around an existing pool.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Creates a Redis cache store from configuration.
    pub fn connect(config: &RedisConfig) -> JokeboxResult<Self> {
        let mut cfg = deadpool_redis::Config::from_url(&config.url);
        cfg.pool = Some(PoolConfig::new(config.pool_size as usize));
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| JokeboxError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Ok(Self::new(pool))
    }

    /// Gets a connection from the pool.
    async fn conn(&self) -> JokeboxResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| JokeboxError::Cache(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> JokeboxResult<Option<Vec<u8>>> {
        let mut conn = self.conn().await?;
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .map_err(|e| JokeboxError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8], expiry: Expiry) -> JokeboxResult<()> {
        let mut conn = self.conn().await?;

        match expiry {
            Expiry::Never => {
                conn.set::<_, _, ()>(key, value).await.map_err(|e| {
                    JokeboxError::Cache(format!("Failed to set key '{}': {}", key, e))
                })?;
                debug!("Cached key '{}' with no expiration", key);
            }
            Expiry::After(ttl) => {
                let ttl_secs = ttl.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, ttl_secs)
                    .await
                    .map_err(|e| {
                        JokeboxError::Cache(format!("Failed to set key '{}': {}", key, e))
                    })?;
                debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
            }
        }

        Ok(())
    }

    async fn exists(&self, key: &str) -> JokeboxResult<bool> {
        let mut conn = self.conn().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| JokeboxError::Cache(format!("Failed to check key '{}': {}", key, e)))?;

        Ok(exists)
    }

    async fn delete(&self, key: &str) -> JokeboxResult<bool> {
        let mut conn = self.conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| JokeboxError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        Ok(deleted > 0)
    }
}

impl std::fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheStore").finish_non_exhaustive()
    }
}
