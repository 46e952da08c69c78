//! Bookmark API
//!
//! Client for the server's `/addBookmark` and `/removeBookmark` endpoints.

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::config::BookmarkConfig;
use crate::error::BookmarkError;
use crate::models::{Bookmark, BookmarkAction, BookmarkResponse};

#[async_trait(?Send)]
pub trait BookmarkApi {
    /// Send one add/remove request and return the server's reply
    async fn submit(
        &self,
        action: BookmarkAction,
        bookmark: &Bookmark,
    ) -> Result<BookmarkResponse, BookmarkError>;
}

/// `BookmarkApi` over `fetch`
#[derive(Debug, Clone)]
pub struct HttpBookmarkApi {
    add_url: String,
    remove_url: String,
}

impl HttpBookmarkApi {
    pub fn new(config: &BookmarkConfig) -> Self {
        Self {
            add_url: BookmarkAction::Add.endpoint(config),
            remove_url: BookmarkAction::Remove.endpoint(config),
        }
    }

    fn url(&self, action: BookmarkAction) -> &str {
        match action {
            BookmarkAction::Add => &self.add_url,
            BookmarkAction::Remove => &self.remove_url,
        }
    }
}

#[async_trait(?Send)]
impl BookmarkApi for HttpBookmarkApi {
    async fn submit(
        &self,
        action: BookmarkAction,
        bookmark: &Bookmark,
    ) -> Result<BookmarkResponse, BookmarkError> {
        let url = self.url(action);
        log::debug!("[Bookmark] POST {}", url);

        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .json(bookmark)
            .map_err(|e| BookmarkError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| BookmarkError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(BookmarkError::Http { status: response.status() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| BookmarkError::Network(e.to_string()))?;
        parse_response(&body)
    }
}

/// A 2xx body without `message` is rejected as well, so the button keeps its
/// state instead of flipping with an empty toast as the old page script did.
fn parse_response(body: &str) -> Result<BookmarkResponse, BookmarkError> {
    serde_json::from_str(body).map_err(|e| BookmarkError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_come_from_config() {
        let config = BookmarkConfig::default().with_api_base(Some("http://localhost:3000".to_string()));
        let api = HttpBookmarkApi::new(&config);
        assert_eq!(api.url(BookmarkAction::Add), "http://localhost:3000/addBookmark");
        assert_eq!(api.url(BookmarkAction::Remove), "http://localhost:3000/removeBookmark");
    }

    #[test]
    fn test_parse_response() {
        let parsed = parse_response(r#"{"message":"Bookmark added successfully"}"#).unwrap();
        assert_eq!(parsed.message, "Bookmark added successfully");
    }

    #[test]
    fn test_parse_response_rejects_non_json() {
        let err = parse_response("<html>oops</html>").unwrap_err();
        assert!(matches!(err, BookmarkError::Decode(_)));
    }

    #[test]
    fn test_parse_response_rejects_missing_message() {
        let err = parse_response(r#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, BookmarkError::Decode(_)));
    }
}
