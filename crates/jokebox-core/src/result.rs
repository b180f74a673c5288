//! Result type alias for Jokebox.

use crate::JokeboxError;

/// A specialized `Result` type for Jokebox operations.
pub type JokeboxResult<T> = Result<T, JokeboxError>;
