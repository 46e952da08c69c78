//! DOM Helpers
//!
//! Thin wrappers over web_sys used by the controller.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::BookmarkConfig;
use crate::error::BookmarkError;
use crate::models::{Bookmark, BookmarkState};

pub fn document() -> Result<Document, BookmarkError> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| BookmarkError::Dom("no document available".to_string()))
}

/// Run `f` once the page has been parsed
pub fn on_ready<F>(f: F) -> Result<(), BookmarkError>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() != "loading" {
        // Module scripts may start after DOMContentLoaded already fired
        f();
        return Ok(());
    }

    let callback = Closure::once_into_js(f);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref::<js_sys::Function>())?;
    Ok(())
}

/// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BookmarkError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `content` of `<meta name="...">`, if present
pub fn meta_content(document: &Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}

/// Bookmark fields from the button's data attributes; missing ones read as empty
pub fn read_bookmark(element: &Element) -> Bookmark {
    let attr = |name: &str| element.get_attribute(name).unwrap_or_default();
    Bookmark {
        title: attr("data-title"),
        link: attr("data-link"),
        description: attr("data-description"),
        image: attr("data-image"),
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Reflect `state` onto the button's marker class and label
pub fn apply_state(
    element: &Element,
    state: BookmarkState,
    config: &BookmarkConfig,
) -> Result<(), BookmarkError> {
    element
        .class_list()
        .toggle_with_force(&config.marker_class, state.is_bookmarked())?;
    element.set_text_content(Some(state.label(config)));
    Ok(())
}
