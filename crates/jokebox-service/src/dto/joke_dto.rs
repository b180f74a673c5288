//! Joke-related DTOs.

use jokebox_core::Joke;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to submit a new joke.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddJokeRequest {
    #[validate(
        length(min = 1, message = "Link must not be empty"),
        url(message = "Link must be a valid URL")
    )]
    pub link: String,
}

/// Joke response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeResponse {
    pub link: String,
}

impl From<Joke> for JokeResponse {
    fn from(joke: Joke) -> Self {
        Self { link: joke.link }
    }
}

/// Joke count response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalJokesResponse {
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokebox_core::ValidateExt;

    #[test]
    fn test_valid_request() {
        let request = AddJokeRequest {
            link: "https://example.com/joke.jpg".to_string(),
        };
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_empty_link_is_rejected() {
        let request = AddJokeRequest {
            link: String::new(),
        };
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_non_url_link_is_rejected() {
        let request = AddJokeRequest {
            link: "not a url".to_string(),
        };
        let err = request.validate_request().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_response_from_joke() {
        let joke = Joke::new(1, "https://example.com/a", 2);
        assert_eq!(
            JokeResponse::from(joke),
            JokeResponse {
                link: "https://example.com/a".to_string()
            }
        );
    }
}
