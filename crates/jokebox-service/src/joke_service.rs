//! Joke service trait definition.

use crate::dto::{AddJokeRequest, JokeResponse, TotalJokesResponse};
use async_trait::async_trait;
use jokebox_core::JokeboxResult;

/// Cache-aside retrieval engine and write path for the joke catalog.
///
/// Read operations prefer the cached snapshot; the cache is brought into
/// agreement with the store only through the repopulation operations, which
/// replace the snapshot wholesale. The write path repopulates before the
/// writer gets its response, so a completed write is visible to all
/// subsequent reads (eventual, not linearizable, consistency).
#[async_trait]
pub trait JokeService: Send + Sync {
    /// Checks whether the joke snapshot is present, without decoding it.
    ///
    /// Absence is a normal `false`; an error means the cache backend failed.
    async fn check_jokes_cache(&self) -> JokeboxResult<bool>;

    /// Checks whether the cached total is present, without parsing it.
    async fn check_total_jokes_cache(&self) -> JokeboxResult<bool>;

    /// Rebuilds the cached snapshot from the full store contents and
    /// returns the encoded bytes. Idempotent; last writer wins.
    async fn repopulate_joke_snapshot(&self) -> JokeboxResult<Vec<u8>>;

    /// Rebuilds the cached total from the store and returns the count.
    async fn repopulate_total_jokes(&self) -> JokeboxResult<u64>;

    /// Selects one joke uniformly at random directly from the store,
    /// bypassing the cache. Fails with `NotFound` on an empty store.
    async fn random_joke_from_store(&self) -> JokeboxResult<String>;

    /// Selects one joke uniformly at random from the cached snapshot.
    ///
    /// Returns `None` when the snapshot holds zero jokes. Fails with
    /// `CacheMiss` when the snapshot is absent and the caller did not
    /// pre-check with [`check_jokes_cache`](Self::check_jokes_cache).
    async fn random_joke_from_cache(&self) -> JokeboxResult<Option<String>>;

    /// Looks up a joke link by id in the cached snapshot.
    ///
    /// Returns `None` when the id is not in the snapshot; not-found is not
    /// an error here.
    async fn cached_joke_by_id(&self, id: i32) -> JokeboxResult<Option<String>>;

    /// Reads the cached joke count. Fails with `CacheMiss` when absent and
    /// `Parse` when the stored value is not a non-negative integer.
    async fn cached_total_jokes(&self) -> JokeboxResult<u64>;

    /// Validates an externally supplied identifier, then checks it against
    /// the store (not the cache).
    async fn joke_exists(&self, id: &str) -> JokeboxResult<bool>;

    /// Serves a random joke: from the snapshot when present, otherwise
    /// directly from the store, warming the snapshot for later readers.
    async fn random_joke(&self) -> JokeboxResult<JokeResponse>;

    /// Serves a joke by id. Returns `None` for an id the store does not
    /// know.
    async fn joke_by_id(&self, id: &str) -> JokeboxResult<Option<JokeResponse>>;

    /// Serves the joke count, repopulating the cached total on a cold
    /// cache.
    async fn total_jokes(&self) -> JokeboxResult<TotalJokesResponse>;

    /// Creates a joke on behalf of an administrator, then refreshes both
    /// cache entries before returning to the writer.
    async fn add_joke(&self, request: AddJokeRequest, creator: i32) -> JokeboxResult<JokeResponse>;
}
