//! Postgres repository implementations.

mod joke_repository;

pub use joke_repository::PgJokeRepository;
