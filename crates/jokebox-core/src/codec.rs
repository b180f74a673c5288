//! Canonical byte encoding for the cached joke snapshot.
//!
//! The cache holds the entire catalog as one JSON-encoded sequence with
//! fixed field names (`id`, `link`, `creator`). Encoding is deterministic
//! for a fixed in-memory ordering: encode → decode → encode yields
//! byte-identical output.

use crate::{Joke, JokeboxResult};

/// Encodes the full joke sequence into its canonical byte form.
pub fn encode_jokes(jokes: &[Joke]) -> JokeboxResult<Vec<u8>> {
    Ok(serde_json::to_vec(jokes)?)
}

/// Decodes snapshot bytes back into the joke sequence.
///
/// An encoded empty sequence decodes to an empty vec, not an error.
pub fn decode_jokes(bytes: &[u8]) -> JokeboxResult<Vec<Joke>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JokeboxError;

    fn sample_jokes() -> Vec<Joke> {
        vec![
            Joke::new(1, "https://example.com/link1", 1),
            Joke::new(2, "https://example.com/link2", 1),
            Joke::new(3, "https://example.com/link3", 2),
        ]
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let jokes = sample_jokes();
        let encoded = encode_jokes(&jokes).unwrap();
        let decoded = decode_jokes(&encoded).unwrap();
        let re_encoded = encode_jokes(&decoded).unwrap();
        assert_eq!(encoded, re_encoded);
        assert_eq!(decoded, jokes);
    }

    #[test]
    fn test_field_names_are_fixed() {
        let encoded = encode_jokes(&[Joke::new(7, "https://example.com/a", 3)]).unwrap();
        let text = String::from_utf8(encoded).unwrap();
        assert!(text.contains("\"id\":7"));
        assert!(text.contains("\"link\":\"https://example.com/a\""));
        assert!(text.contains("\"creator\":3"));
    }

    #[test]
    fn test_empty_sequence_decodes_to_empty_vec() {
        let encoded = encode_jokes(&[]).unwrap();
        assert_eq!(encoded, b"[]");
        let decoded = decode_jokes(&encoded).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_corrupt_bytes_fail_with_serialization_error() {
        let err = decode_jokes(b"{not a snapshot").unwrap_err();
        assert!(matches!(err, JokeboxError::Serialization(_)));
    }
}
