//! Error Types
//!
//! Failures that can occur while toggling a bookmark.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookmarkError {
    /// Server answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    /// Response body was not the expected `{"message": ...}` JSON
    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for BookmarkError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        BookmarkError::Dom(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status() {
        let err = BookmarkError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_decode_error_message() {
        let err = BookmarkError::Decode("missing field `message`".into());
        assert_eq!(err.to_string(), "unexpected response body: missing field `message`");
    }
}
