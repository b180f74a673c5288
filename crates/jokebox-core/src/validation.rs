//! Validation utilities.

use crate::{FieldError, JokeboxError, JokeboxResult};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `JokeboxError` on failure.
    fn validate_request(&self) -> Result<(), JokeboxError> {
        self.validate().map_err(validation_errors_to_jokebox_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `JokeboxError`.
#[must_use]
pub fn validation_errors_to_jokebox_error(errors: ValidationErrors) -> JokeboxError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    JokeboxError::Validation(message)
}

/// Parses an externally supplied joke identifier.
///
/// Identifiers arrive as text from the outer layers and must be well-formed
/// positive integers before they are trusted in a store query.
pub fn parse_joke_id(raw: &str) -> JokeboxResult<i32> {
    let id: i32 = raw
        .trim()
        .parse()
        .map_err(|_| JokeboxError::Validation(format!("malformed joke id: {:?}", raw)))?;
    if id < 1 {
        return Err(JokeboxError::Validation(format!(
            "joke id must be positive, got {}",
            id
        )));
    }
    Ok(id)
}
