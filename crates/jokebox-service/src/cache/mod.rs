//! Caching infrastructure for the service layer.
//!
//! This module provides the cache handle abstraction with an in-process
//! implementation and a Redis implementation. The handle has no built-in
//! consistency guarantees; the retrieval engine owns when and how entries
//! are refreshed.

pub mod cache_keys;
mod cache_store;
mod memory_cache;
mod redis_cache;

pub use cache_store::{CacheStore, Expiry};
pub use memory_cache::MemoryCacheStore;
pub use redis_cache::RedisCacheStore;
