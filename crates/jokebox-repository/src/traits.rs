//! Repository trait definitions.

use async_trait::async_trait;
use jokebox_core::{Joke, JokeboxResult};

/// Store accessor for the joke catalog.
///
/// All queries are parameterized; implementations must distinguish
/// "no rows" (`None`/`false`) from a failed query (`Err`).
#[async_trait]
pub trait JokeRepository: Send + Sync {
    /// Returns every joke currently committed to the store, ordered by id.
    async fn find_all(&self) -> JokeboxResult<Vec<Joke>>;

    /// Returns one uniformly selected joke, or `None` if the store is empty.
    ///
    /// Selection is uniform over the rows committed at query time; it is
    /// not reproducible.
    async fn find_random(&self) -> JokeboxResult<Option<Joke>>;

    /// Checks whether a joke with the given id exists.
    async fn exists_by_id(&self, id: i32) -> JokeboxResult<bool>;

    /// Inserts a new joke and returns the stored row with its assigned id.
    async fn insert(&self, link: &str, creator: i32) -> JokeboxResult<Joke>;

    /// Counts all jokes.
    async fn count(&self) -> JokeboxResult<u64>;

    /// Checks whether an administrator with the given id exists.
    async fn administrator_exists(&self, id: i32) -> JokeboxResult<bool>;
}
