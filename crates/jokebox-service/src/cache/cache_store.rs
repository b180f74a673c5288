//! Cache store trait for the shared byte cache.

use async_trait::async_trait;
use jokebox_core::JokeboxResult;
use std::time::Duration;

/// Expiration policy for a single cache write.
///
/// The snapshot entries this service maintains never expire; they are
/// replaced wholesale on repopulation. Expiry is an explicit parameter on
/// every write, with [`Expiry::Never`] as the named no-TTL policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// The entry stays until it is overwritten or deleted.
    Never,
    /// The entry expires after the given duration.
    After(Duration),
}

/// Shared key → byte-sequence cache.
///
/// Implementations must be safe for concurrent reads and writes from
/// arbitrarily many callers, and a single-key `set` must be atomic. Key
/// absence is a normal outcome (`Ok(None)` / `Ok(false)`), distinct from a
/// present-but-empty value; an `Err` means the backend itself failed.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Gets the raw bytes stored under a key.
    async fn get(&self, key: &str) -> JokeboxResult<Option<Vec<u8>>>;

    /// Stores bytes under a key with an explicit expiration policy.
    async fn set(&self, key: &str, value: &[u8], expiry: Expiry) -> JokeboxResult<()>;

    /// Checks whether a key is present, without reading its value.
    async fn exists(&self, key: &str) -> JokeboxResult<bool>;

    /// Deletes a key. Returns `true` if it existed.
    async fn delete(&self, key: &str) -> JokeboxResult<bool>;
}
