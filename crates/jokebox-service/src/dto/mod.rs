//! Data transfer objects.

mod joke_dto;

pub use joke_dto::*;
