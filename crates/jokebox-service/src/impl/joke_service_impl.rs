//! Joke service implementation.

use crate::cache::{cache_keys, CacheStore, Expiry};
use crate::dto::{AddJokeRequest, JokeResponse, TotalJokesResponse};
use crate::joke_service::JokeService;
use crate::random::{RandomSource, ThreadRandomSource};
use async_trait::async_trait;
use jokebox_core::{codec, parse_joke_id, JokeboxError, JokeboxResult, ValidateExt};
use jokebox_repository::JokeRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Cache-aside joke service.
///
/// The store and cache handles are constructor-injected; the service holds
/// no process-wide state of its own.
pub struct JokeServiceImpl<R: JokeRepository, C: CacheStore> {
    repository: Arc<R>,
    cache: Arc<C>,
    random: Arc<dyn RandomSource>,
}

impl<R: JokeRepository, C: CacheStore> JokeServiceImpl<R, C> {
    /// Creates a new joke service.
    pub fn new(repository: Arc<R>, cache: Arc<C>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            repository,
            cache,
            random,
        }
    }

    /// Creates a joke service with the default thread-local random source.
    pub fn with_thread_rng(repository: Arc<R>, cache: Arc<C>) -> Self {
        Self::new(repository, cache, Arc::new(ThreadRandomSource))
    }

    /// Reads and decodes the cached snapshot, failing with `CacheMiss` when
    /// it is absent.
    async fn read_snapshot(&self) -> JokeboxResult<Vec<jokebox_core::Joke>> {
        let bytes = self
            .cache
            .get(cache_keys::JOKES)
            .await?
            .ok_or_else(|| JokeboxError::cache_miss(cache_keys::JOKES))?;
        codec::decode_jokes(&bytes)
    }
}

#[async_trait]
impl<R, C> JokeService for JokeServiceImpl<R, C>
where
    R: JokeRepository + 'static,
    C: CacheStore + 'static,
{
    async fn check_jokes_cache(&self) -> JokeboxResult<bool> {
        self.cache.exists(cache_keys::JOKES).await
    }

    async fn check_total_jokes_cache(&self) -> JokeboxResult<bool> {
        self.cache.exists(cache_keys::TOTAL).await
    }

    async fn repopulate_joke_snapshot(&self) -> JokeboxResult<Vec<u8>> {
        debug!("Repopulating joke snapshot from store");

        let jokes = self.repository.find_all().await?;
        let encoded = codec::encode_jokes(&jokes)?;
        self.cache
            .set(cache_keys::JOKES, &encoded, Expiry::Never)
            .await?;

        info!("Joke snapshot repopulated with {} entries", jokes.len());
        Ok(encoded)
    }

    async fn repopulate_total_jokes(&self) -> JokeboxResult<u64> {
        let total = self.repository.count().await?;
        self.cache
            .set(cache_keys::TOTAL, total.to_string().as_bytes(), Expiry::Never)
            .await?;

        debug!("Cached total refreshed: {}", total);
        Ok(total)
    }

    async fn random_joke_from_store(&self) -> JokeboxResult<String> {
        let joke = self
            .repository
            .find_random()
            .await?
            .ok_or_else(|| JokeboxError::not_found("Joke", "any"))?;

        Ok(joke.link)
    }

    async fn random_joke_from_cache(&self) -> JokeboxResult<Option<String>> {
        let jokes = self.read_snapshot().await?;
        if jokes.is_empty() {
            return Ok(None);
        }

        let index = self.random.pick(jokes.len());
        Ok(Some(jokes[index].link.clone()))
    }

    async fn cached_joke_by_id(&self, id: i32) -> JokeboxResult<Option<String>> {
        let jokes = self.read_snapshot().await?;
        Ok(jokes.into_iter().find(|j| j.id == id).map(|j| j.link))
    }

    async fn cached_total_jokes(&self) -> JokeboxResult<u64> {
        let bytes = self
            .cache
            .get(cache_keys::TOTAL)
            .await?
            .ok_or_else(|| JokeboxError::cache_miss(cache_keys::TOTAL))?;

        let text = std::str::from_utf8(&bytes)
            .map_err(|e| JokeboxError::Parse(format!("cached total is not valid UTF-8: {}", e)))?;

        text.trim().parse::<u64>().map_err(|e| {
            JokeboxError::Parse(format!(
                "cached total {:?} is not a non-negative integer: {}",
                text, e
            ))
        })
    }

    async fn joke_exists(&self, id: &str) -> JokeboxResult<bool> {
        let id = parse_joke_id(id)?;
        self.repository.exists_by_id(id).await
    }

    async fn random_joke(&self) -> JokeboxResult<JokeResponse> {
        if self.check_jokes_cache().await? {
            return match self.random_joke_from_cache().await? {
                Some(link) => Ok(JokeResponse { link }),
                None => Err(JokeboxError::not_found("Joke", "any")),
            };
        }

        // Cold cache: serve directly from the store, then warm the snapshot
        // for subsequent readers.
        let link = self.random_joke_from_store().await?;
        self.repopulate_joke_snapshot().await?;
        Ok(JokeResponse { link })
    }

    async fn joke_by_id(&self, id: &str) -> JokeboxResult<Option<JokeResponse>> {
        let parsed = parse_joke_id(id)?;

        if !self.repository.exists_by_id(parsed).await? {
            return Ok(None);
        }

        if !self.check_jokes_cache().await? {
            self.repopulate_joke_snapshot().await?;
        }

        Ok(self
            .cached_joke_by_id(parsed)
            .await?
            .map(|link| JokeResponse { link }))
    }

    async fn total_jokes(&self) -> JokeboxResult<TotalJokesResponse> {
        let total = if self.check_total_jokes_cache().await? {
            self.cached_total_jokes().await?
        } else {
            self.repopulate_total_jokes().await?
        };

        Ok(TotalJokesResponse { total })
    }

    async fn add_joke(&self, request: AddJokeRequest, creator: i32) -> JokeboxResult<JokeResponse> {
        debug!("Adding joke for creator {}", creator);

        request.validate_request()?;

        if !self.repository.administrator_exists(creator).await? {
            return Err(JokeboxError::validation(format!(
                "unknown creator id: {}",
                creator
            )));
        }

        let joke = self.repository.insert(&request.link, creator).await?;

        // The write request is the consistency boundary: both cache entries
        // reflect the new state before the writer gets its response.
        self.repopulate_joke_snapshot().await?;
        self.repopulate_total_jokes().await?;

        info!("Joke created: {}", joke.id);
        Ok(JokeResponse::from(joke))
    }
}

impl<R: JokeRepository, C: CacheStore> std::fmt::Debug for JokeServiceImpl<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JokeServiceImpl").finish_non_exhaustive()
    }
}
