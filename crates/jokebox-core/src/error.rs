//! Unified error types for all layers of the service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all layers of Jokebox.
///
/// The variants cover the store, the cache, and the validation surface of
/// the retrieval engine. Semantic absence in by-ID and cache lookups is not
/// an error; those operations return `Ok(None)` instead.
#[derive(Error, Debug)]
pub enum JokeboxError {
    /// Resource not found (e.g., random selection over an empty store)
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error (malformed identifier or invalid request)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database connectivity or query failure
    #[error("Database error: {0}")]
    Database(String),

    /// Cache backend unreachable or failed
    #[error("Cache error: {0}")]
    Cache(String),

    /// Cache key absent although the caller assumed presence.
    /// Pre-check with the existence operations to avoid this.
    #[error("Cache key absent: {key}")]
    CacheMiss { key: String },

    /// Cached bytes could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Cached value present but malformed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Operation timed out waiting for a resource
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl JokeboxError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Timeout(_) | Self::CacheMiss { .. } => 503,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Serialization(_)
            | Self::Parse(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::CacheMiss { .. } => "CACHE_MISS",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a cache-miss error for a key.
    #[must_use]
    pub fn cache_miss<T: Into<String>>(key: T) -> Self {
        Self::CacheMiss { key: key.into() }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    ///
    /// The core never retries; this informs the calling layer's
    /// retry/backoff policy.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Cache(_) | Self::Timeout(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for JokeboxError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::PoolTimedOut => {
                Self::Timeout("timed out waiting for a database connection".to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for JokeboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `JokeboxError`.
    #[must_use]
    pub fn from_error(error: &JokeboxError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&JokeboxError> for ErrorResponse {
    fn from(error: &JokeboxError) -> Self {
        Self::from_error(error)
    }
}
