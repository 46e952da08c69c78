//! Bookmark Toggle
//!
//! One add/remove round-trip. The new state is only produced when the
//! server acknowledged the request.

use crate::api::BookmarkApi;
use crate::error::BookmarkError;
use crate::models::{Bookmark, BookmarkState};

/// Result of a successful toggle
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub state: BookmarkState,
    pub message: String,
}

pub async fn toggle_bookmark<A>(
    api: &A,
    current: BookmarkState,
    bookmark: &Bookmark,
) -> Result<ToggleOutcome, BookmarkError>
where
    A: BookmarkApi + ?Sized,
{
    let action = current.action();
    let response = api.submit(action, bookmark).await?;
    Ok(ToggleOutcome {
        state: action.outcome_state(),
        message: response.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::models::BookmarkAction;

    fn sample_bookmark() -> Bookmark {
        Bookmark {
            title: "Night City".to_string(),
            link: "https://www.deviantart.com/art/night-city".to_string(),
            description: "Neon skyline".to_string(),
            image: "/image?url=https%3A%2F%2Fimages.example%2F1.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_when_not_bookmarked() {
        let api = MockApi::replying("Added!");
        let bookmark = sample_bookmark();

        let outcome = toggle_bookmark(&api, BookmarkState::NotBookmarked, &bookmark)
            .await
            .expect("toggle failed");

        assert_eq!(outcome.state, BookmarkState::Bookmarked);
        assert_eq!(outcome.message, "Added!");
        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, BookmarkAction::Add);
        assert_eq!(calls[0].1, bookmark);
    }

    #[tokio::test]
    async fn test_remove_when_bookmarked() {
        let api = MockApi::replying("Bookmark removed successfully");

        let outcome = toggle_bookmark(&api, BookmarkState::Bookmarked, &sample_bookmark())
            .await
            .expect("toggle failed");

        assert_eq!(outcome.state, BookmarkState::NotBookmarked);
        assert_eq!(api.calls.borrow()[0].0, BookmarkAction::Remove);
    }

    #[tokio::test]
    async fn test_http_failure_carries_status() {
        let api = MockApi::failing(BookmarkError::Http { status: 500 });

        let err = toggle_bookmark(&api, BookmarkState::NotBookmarked, &sample_bookmark())
            .await
            .unwrap_err();

        assert_eq!(err, BookmarkError::Http { status: 500 });
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_attributes_are_sent_verbatim() {
        let api = MockApi::replying("ok");

        toggle_bookmark(&api, BookmarkState::NotBookmarked, &Bookmark::default())
            .await
            .expect("toggle failed");

        assert_eq!(api.calls.borrow()[0].1, Bookmark::default());
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let api: Box<dyn BookmarkApi> = Box::new(MockApi::failing(BookmarkError::Decode(
            "missing field `message`".to_string(),
        )));

        let result = toggle_bookmark(api.as_ref(), BookmarkState::Bookmarked, &sample_bookmark()).await;

        assert!(matches!(result, Err(BookmarkError::Decode(_))));
    }
}
