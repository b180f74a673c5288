//! # Jokebox Service
//!
//! The cache-aside retrieval engine for the joke catalog: cache handle
//! abstraction, snapshot repopulation, random/by-id lookups served from
//! cached bytes, and the write path that refreshes the cache before a
//! write request is answered.

pub mod cache;
pub mod dto;
pub mod joke_service;
pub mod random;
mod r#impl;

pub use cache::*;
pub use dto::*;
pub use joke_service::*;
pub use r#impl::JokeServiceImpl;
pub use random::*;
