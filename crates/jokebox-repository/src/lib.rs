//! # Jokebox Repository
//!
//! Store accessor for the Jokebox catalog: the `JokeRepository` trait, its
//! SQLx/Postgres implementation, and the connection pool wrapper.
//!
//! ```text
//! Service
//!   ↓  Arc<R: JokeRepository>   (store interface)
//! PgJokeRepository              (SQLx / Postgres)
//!   ↓
//! Postgres
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jokebox_core::{Joke, JokeboxResult};
    use std::sync::Mutex;

    /// In-memory repository for testing.
    struct InMemoryJokeRepository {
        jokes: Mutex<Vec<Joke>>,
        administrators: Vec<i32>,
        next_id: Mutex<i32>,
    }

    impl InMemoryJokeRepository {
        fn new(administrators: Vec<i32>) -> Self {
            Self {
                jokes: Mutex::new(Vec::new()),
                administrators,
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl JokeRepository for InMemoryJokeRepository {
        async fn find_all(&self) -> JokeboxResult<Vec<Joke>> {
            Ok(self.jokes.lock().unwrap().clone())
        }

        async fn find_random(&self) -> JokeboxResult<Option<Joke>> {
            Ok(self.jokes.lock().unwrap().first().cloned())
        }

        async fn exists_by_id(&self, id: i32) -> JokeboxResult<bool> {
            Ok(self.jokes.lock().unwrap().iter().any(|j| j.id == id))
        }

        async fn insert(&self, link: &str, creator: i32) -> JokeboxResult<Joke> {
            let mut next_id = self.next_id.lock().unwrap();
            let joke = Joke::new(*next_id, link, creator);
            *next_id += 1;
            self.jokes.lock().unwrap().push(joke.clone());
            Ok(joke)
        }

        async fn count(&self) -> JokeboxResult<u64> {
            Ok(self.jokes.lock().unwrap().len() as u64)
        }

        async fn administrator_exists(&self, id: i32) -> JokeboxResult<bool> {
            Ok(self.administrators.contains(&id))
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryJokeRepository::new(vec![1]);
        let a = repo.insert("https://example.com/a", 1).await.unwrap();
        let b = repo.insert("https://example.com/b", 1).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_empty_store_yields_no_rows_not_an_error() {
        let repo = InMemoryJokeRepository::new(vec![]);
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.find_random().await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_exists_by_id() {
        let repo = InMemoryJokeRepository::new(vec![1]);
        repo.insert("https://example.com/a", 1).await.unwrap();
        assert!(repo.exists_by_id(1).await.unwrap());
        assert!(!repo.exists_by_id(4).await.unwrap());
    }

    #[tokio::test]
    async fn test_administrator_exists() {
        let repo = InMemoryJokeRepository::new(vec![1, 2]);
        assert!(repo.administrator_exists(1).await.unwrap());
        assert!(!repo.administrator_exists(9).await.unwrap());
    }
}
