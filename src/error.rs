//! Error types shared by the client library and the command-line tool.

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// All the ways a client call or a tool command can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The API key doesn't look like a Revolut key at all.
    #[error("API key has the wrong format - not starting with sand_ or prod_")]
    KeyFormat,

    /// Bad or missing configuration. Fatal to the running command.
    #[error("{0}")]
    Config(String),

    /// The remote API answered with a non-success status. The message is the
    /// decoded error envelope when one was sent, otherwise the fixed
    /// status-code table entry.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The network request itself failed (DNS, refused connection, timeout).
    /// Distinct from an HTTP-level failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body didn't match the documented shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Cache or config file I/O. Load failures are downgraded to warnings by
    /// the cache itself; this surfaces only where writing must not fail.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Error envelope the API sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

impl Error {
    /// Decode a failed response into an `Error::Api`.
    ///
    /// Tries the JSON envelope `{message, code}` first and falls back to the
    /// fixed status-code table. One policy for every resource.
    pub fn from_response(status: u16, body: &[u8]) -> Error {
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body) {
            if let Some(message) = envelope.message {
                if !message.is_empty() {
                    return Error::Api { status, message };
                }
            }
        }

        Error::Api {
            status,
            message: code_to_message(status).to_string(),
        }
    }
}

/// Translate an HTTP status code into a human-readable cause.
///
/// Unmapped codes yield the empty message; callers display what they get.
pub fn code_to_message(code: u16) -> &'static str {
    match code {
        400 => "bad request - check syntax",
        401 => "not authorized - check the API key",
        403 => "resource or action can't be accessed with supplied key",
        404 => "unknown resource - check spelling",
        405 => "you tried to access an endpoint with an invalid method",
        406 => "you requested a format that isn't JSON",
        429 => "you're sending too many requests too quickly",
        500 => "internal server error - try again later",
        501 => "service unavailable - offline for maintenance",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table_messages() {
        let expected = [
            (400, "bad request - check syntax"),
            (401, "not authorized - check the API key"),
            (403, "resource or action can't be accessed with supplied key"),
            (404, "unknown resource - check spelling"),
            (405, "you tried to access an endpoint with an invalid method"),
            (406, "you requested a format that isn't JSON"),
            (429, "you're sending too many requests too quickly"),
            (500, "internal server error - try again later"),
            (501, "service unavailable - offline for maintenance"),
        ];
        for (code, message) in expected {
            assert_eq!(code_to_message(code), message);
        }
    }

    #[test]
    fn test_unmapped_codes_are_empty() {
        for code in [100, 200, 204, 301, 402, 418, 502, 503, 599] {
            assert_eq!(code_to_message(code), "");
        }
    }

    #[test]
    fn test_envelope_wins_over_table() {
        let body = br#"{"message":"insufficient funds","code":1042}"#;
        let err = Error::from_response(402, body);
        assert_eq!(err.to_string(), "insufficient funds");
        match err {
            Error::Api { status, .. } => assert_eq!(status, 402),
            other => panic!("expected Error::Api, got {:?}", other),
        }
    }

    #[test]
    fn test_table_fallback_when_body_is_not_an_envelope() {
        let err = Error::from_response(404, b"<html>not found</html>");
        assert_eq!(err.to_string(), "unknown resource - check spelling");
    }

    #[test]
    fn test_table_fallback_when_envelope_message_is_empty() {
        let err = Error::from_response(429, br#"{"message":"","code":9}"#);
        assert_eq!(
            err.to_string(),
            "you're sending too many requests too quickly"
        );
    }

    #[test]
    fn test_unmapped_code_without_envelope_yields_empty_message() {
        let err = Error::from_response(418, b"");
        assert_eq!(err.to_string(), "");
    }
}
