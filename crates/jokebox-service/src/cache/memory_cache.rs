//! In-process cache implementation.

use super::{CacheStore, Expiry};
use async_trait::async_trait;
use jokebox_core::JokeboxResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Instant;

/// Process-wide in-memory cache.
///
/// Entries written with [`Expiry::Never`] stay until overwritten or
/// deleted. Timed entries are dropped lazily on access.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, Entry>>,
}

struct Entry {
    value: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Instant::now() >= at)
    }
}

impl MemoryCacheStore {
    /// Creates an empty cache store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn purge_if_expired(&self, key: &str) {
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(Entry::is_expired) {
            entries.remove(key);
        }
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> JokeboxResult<Option<Vec<u8>>> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }
        self.purge_if_expired(key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], expiry: Expiry) -> JokeboxResult<()> {
        let expires_at = match expiry {
            Expiry::Never => None,
            Expiry::After(ttl) => Some(Instant::now() + ttl),
        };
        self.entries.write().insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn exists(&self, key: &str) -> JokeboxResult<bool> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return Ok(false),
                Some(entry) if !entry.is_expired() => return Ok(true),
                Some(_) => {}
            }
        }
        self.purge_if_expired(key);
        Ok(false)
    }

    async fn delete(&self, key: &str) -> JokeboxResult<bool> {
        Ok(self.entries.write().remove(key).is_some())
    }
}

impl std::fmt::Debug for MemoryCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheStore")
            .field("len", &self.entries.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_absent_key_is_not_an_error() {
        let cache = MemoryCacheStore::new();
        assert_eq!(cache.get("jokes").await.unwrap(), None);
        assert!(!cache.exists("jokes").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let cache = MemoryCacheStore::new();
        cache.set("total", b"10", Expiry::Never).await.unwrap();
        assert_eq!(cache.get("total").await.unwrap(), Some(b"10".to_vec()));
        assert!(cache.exists("total").await.unwrap());
    }

    #[tokio::test]
    async fn test_present_but_empty_is_distinct_from_absent() {
        let cache = MemoryCacheStore::new();
        cache.set("jokes", b"[]", Expiry::Never).await.unwrap();
        assert!(cache.exists("jokes").await.unwrap());
        assert_eq!(cache.get("jokes").await.unwrap(), Some(b"[]".to_vec()));
    }

    #[tokio::test]
    async fn test_last_writer_wins() {
        let cache = MemoryCacheStore::new();
        cache.set("total", b"1", Expiry::Never).await.unwrap();
        cache.set("total", b"2", Expiry::Never).await.unwrap();
        assert_eq!(cache.get("total").await.unwrap(), Some(b"2".to_vec()));
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCacheStore::new();
        cache.set("jokes", b"[]", Expiry::Never).await.unwrap();
        assert!(cache.delete("jokes").await.unwrap());
        assert!(!cache.delete("jokes").await.unwrap());
        assert!(!cache.exists("jokes").await.unwrap());
    }

    #[tokio::test]
    async fn test_timed_entry_expires() {
        let cache = MemoryCacheStore::new();
        cache
            .set("ephemeral", b"x", Expiry::After(Duration::from_millis(5)))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!cache.exists("ephemeral").await.unwrap());
        assert_eq!(cache.get("ephemeral").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_readers_and_writers() {
        let cache = Arc::new(MemoryCacheStore::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    let value = i.to_string();
                    cache
                        .set("total", value.as_bytes(), Expiry::Never)
                        .await
                        .unwrap();
                    let _ = cache.get("total").await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert!(cache.exists("total").await.unwrap());
    }
}
