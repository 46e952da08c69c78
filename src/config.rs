//! Bookmark Configuration
//!
//! Selectors, endpoints, labels and timings. Read once at startup.

/// `<meta name="...">` holding an optional API base URL
pub const API_BASE_META: &str = "bookmark-api-base";

#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkConfig {
    /// Selector for the buttons bound at page-ready
    pub selector: String,
    /// Class present on a button whose page is bookmarked
    pub marker_class: String,
    /// Attribute set on a button once its click handler is attached
    pub bound_attribute: String,
    /// Prefix for the endpoints; empty means same origin
    pub api_base: String,
    pub add_path: String,
    pub remove_path: String,
    pub bookmark_label: String,
    pub unbookmark_label: String,
    /// Toast text shown for any failure
    pub error_message: String,
    pub toast_display_ms: u32,
}

impl Default for BookmarkConfig {
    fn default() -> Self {
        Self {
            selector: ".bookmark-button".to_string(),
            marker_class: "bookmarked".to_string(),
            bound_attribute: "data-bookmark-bound".to_string(),
            api_base: String::new(),
            add_path: "/addBookmark".to_string(),
            remove_path: "/removeBookmark".to_string(),
            bookmark_label: "Bookmark".to_string(),
            unbookmark_label: "Unbookmark".to_string(),
            error_message: "An error occurred while processing the bookmark.".to_string(),
            toast_display_ms: leptos_toast::DEFAULT_DISPLAY_MS,
        }
    }
}

impl BookmarkConfig {
    /// Override the API base; blank values are ignored
    pub fn with_api_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base.map(|b| b.trim().to_string()).filter(|b| !b.is_empty()) {
            self.api_base = base;
        }
        self
    }
}
