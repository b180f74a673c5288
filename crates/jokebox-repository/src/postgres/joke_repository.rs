//! Postgres joke repository implementation.

use crate::{pool::DatabasePool, traits::JokeRepository};
use async_trait::async_trait;
use jokebox_core::{Joke, JokeboxResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Postgres joke repository implementation.
#[derive(Clone)]
pub struct PgJokeRepository {
    pool: Arc<DatabasePool>,
}

impl PgJokeRepository {
    /// Creates a new Postgres joke repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a joke.
#[derive(Debug, FromRow)]
struct JokeRow {
    id: i32,
    link: String,
    creator: i32,
}

impl From<JokeRow> for Joke {
    fn from(row: JokeRow) -> Self {
        Self {
            id: row.id,
            link: row.link,
            creator: row.creator,
        }
    }
}

#[async_trait]
impl JokeRepository for PgJokeRepository {
    async fn find_all(&self) -> JokeboxResult<Vec<Joke>> {
        debug!("Loading full joke catalog");

        let rows = sqlx::query_as::<_, JokeRow>(
            r#"
            SELECT id, link, creator
            FROM jokes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Joke::from).collect())
    }

    async fn find_random(&self) -> JokeboxResult<Option<Joke>> {
        debug!("Selecting random joke from store");

        let row = sqlx::query_as::<_, JokeRow>(
            r#"
            SELECT id, link, creator
            FROM jokes
            ORDER BY random()
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Joke::from))
    }

    async fn exists_by_id(&self, id: i32) -> JokeboxResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM jokes WHERE id = $1 LIMIT 1")
                .bind(id)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn insert(&self, link: &str, creator: i32) -> JokeboxResult<Joke> {
        debug!("Inserting joke for creator {}", creator);

        let row = sqlx::query_as::<_, JokeRow>(
            r#"
            INSERT INTO jokes (link, creator)
            VALUES ($1, $2)
            RETURNING id, link, creator
            "#,
        )
        .bind(link)
        .bind(creator)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn count(&self) -> JokeboxResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jokes")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }

    async fn administrator_exists(&self, id: i32) -> JokeboxResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM administrators WHERE id = $1 LIMIT 1")
                .bind(id)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }
}

impl std::fmt::Debug for PgJokeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgJokeRepository").finish_non_exhaustive()
    }
}
