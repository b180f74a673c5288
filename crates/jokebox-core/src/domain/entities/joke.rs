//! Joke entity.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single catalog entry: a link to a joke, attributed to the
/// administrator who submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Joke {
    /// Store-assigned identifier, immutable once created.
    pub id: i32,

    /// Link to the joke.
    #[validate(length(min = 1), url)]
    pub link: String,

    /// Identifier of the administrator who submitted this joke. The joke
    /// references the administrator; it does not own it.
    pub creator: i32,
}

impl Joke {
    /// Creates a joke with the given details.
    #[must_use]
    pub fn new(id: i32, link: impl Into<String>, creator: i32) -> Self {
        Self {
            id,
            link: link.into(),
            creator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_joke() {
        let joke = Joke::new(1, "https://example.com/joke.jpg", 1);
        assert!(joke.validate().is_ok());
    }

    #[test]
    fn test_link_must_be_url() {
        let joke = Joke::new(1, "not a url", 1);
        assert!(joke.validate().is_err());
    }

    #[test]
    fn test_link_must_not_be_empty() {
        let joke = Joke::new(1, "", 1);
        assert!(joke.validate().is_err());
    }
}
