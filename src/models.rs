//! Frontend Models
//!
//! Bookmark payload, button state and the server's reply.

use serde::{Deserialize, Serialize};

use crate::config::BookmarkConfig;

/// Bookmark data sent to the server (field names match server expectation)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bookmark {
    pub title: String,
    pub link: String,
    pub description: String,
    pub image: String,
}

/// Reply body of `/addBookmark` and `/removeBookmark`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookmarkResponse {
    pub message: String,
}

/// Identifier of a bound button, stable for the page lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(pub usize);

/// Whether a button's page is currently bookmarked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkState {
    Bookmarked,
    NotBookmarked,
}

impl BookmarkState {
    /// State implied by the marker class in server-rendered markup
    pub fn from_marker(has_marker_class: bool) -> Self {
        if has_marker_class {
            BookmarkState::Bookmarked
        } else {
            BookmarkState::NotBookmarked
        }
    }

    pub fn is_bookmarked(self) -> bool {
        self == BookmarkState::Bookmarked
    }

    /// Action a click performs in this state
    pub fn action(self) -> BookmarkAction {
        match self {
            BookmarkState::Bookmarked => BookmarkAction::Remove,
            BookmarkState::NotBookmarked => BookmarkAction::Add,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BookmarkState::Bookmarked => BookmarkState::NotBookmarked,
            BookmarkState::NotBookmarked => BookmarkState::Bookmarked,
        }
    }

    /// Button text; names the action a click would perform
    pub fn label(self, config: &BookmarkConfig) -> &str {
        match self {
            BookmarkState::Bookmarked => &config.unbookmark_label,
            BookmarkState::NotBookmarked => &config.bookmark_label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkAction {
    Add,
    Remove,
}

impl BookmarkAction {
    /// Used in log lines: "Error adding bookmark"
    pub fn verb(self) -> &'static str {
        match self {
            BookmarkAction::Add => "adding",
            BookmarkAction::Remove => "removing",
        }
    }

    /// Full URL of the endpoint handling this action
    pub fn endpoint(self, config: &BookmarkConfig) -> String {
        let path = match self {
            BookmarkAction::Add => &config.add_path,
            BookmarkAction::Remove => &config.remove_path,
        };
        join_url(&config.api_base, path)
    }

    /// State once the server acknowledged the action
    pub fn outcome_state(self) -> BookmarkState {
        match self {
            BookmarkAction::Add => BookmarkState::Bookmarked,
            BookmarkAction::Remove => BookmarkState::NotBookmarked,
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
