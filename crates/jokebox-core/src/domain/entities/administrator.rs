//! Administrator entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An administrator authorized to submit jokes.
///
/// Authentication and token issuance live outside this repository; jokes
/// reference administrators as their creator, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Administrator {
    /// Unique identifier.
    pub id: i32,

    /// API key identifying the administrator.
    pub key: String,

    /// Bearer token (never exposed via API).
    #[serde(skip_serializing)]
    pub token: String,

    /// When the administrator last issued an authenticated request.
    pub last_used: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_never_serialized() {
        let admin = Administrator {
            id: 1,
            key: "key-1".to_string(),
            token: "secret-token".to_string(),
            last_used: Utc::now(),
        };
        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("secret-token"));
        assert!(json.contains("key-1"));
    }

    #[test]
    fn test_deserializes_from_full_row() {
        let json = r#"{"id":2,"key":"key-2","token":"tok","last_used":"2021-07-01T00:00:00Z"}"#;
        let admin: Administrator = serde_json::from_str(json).unwrap();
        assert_eq!(admin.id, 2);
        assert_eq!(admin.token, "tok");
    }
}
