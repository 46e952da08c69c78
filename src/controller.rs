//! Bookmark Controller
//!
//! Binds every bookmark button present at startup and runs the
//! add/remove round-trip when one is clicked.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::Toaster;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::api::BookmarkApi;
use crate::config::BookmarkConfig;
use crate::dom;
use crate::error::BookmarkError;
use crate::models::{Bookmark, BookmarkState, ButtonId};
use crate::store::{
    store_add_button, store_begin_request, store_button, store_button_count, store_button_state,
    store_finish_request, store_set_button_state, BookmarkStore, ButtonEntry,
};
use crate::toggle::toggle_bookmark;

/// Handle to a bound button element
pub struct BookmarkButton {
    pub id: ButtonId,
    element: Element,
}

struct Inner {
    buttons: Vec<BookmarkButton>,
    store: BookmarkStore,
    toaster: Toaster,
    config: Rc<BookmarkConfig>,
    api: Rc<dyn BookmarkApi>,
}

/// Owns the bound buttons; clones share the same list
#[derive(Clone)]
pub struct BookmarkController {
    inner: Rc<Inner>,
}

impl BookmarkController {
    /// Bind every matching button in `document` that is not bound yet
    pub fn bind(
        document: &Document,
        config: Rc<BookmarkConfig>,
        store: BookmarkStore,
        toaster: Toaster,
        api: Rc<dyn BookmarkApi>,
    ) -> Result<Self, BookmarkError> {
        let first_id = store_button_count(&store);
        let mut buttons = Vec::new();

        let candidates = dom::query_all(document, &config.selector)?;
        let claimed = claim_unbound(candidates, |element: &Element| -> Result<bool, BookmarkError> {
            if element.has_attribute(&config.bound_attribute) {
                return Ok(false);
            }
            element.set_attribute(&config.bound_attribute, "")?;
            Ok(true)
        })?;

        for element in claimed {
            let id = ButtonId(first_id + buttons.len());
            let state = BookmarkState::from_marker(dom::has_class(&element, &config.marker_class));
            store_add_button(&store, ButtonEntry { id, state, in_flight: 0 });
            buttons.push(BookmarkButton { id, element });
        }

        let controller = Self {
            inner: Rc::new(Inner { buttons, store, toaster, config, api }),
        };
        for button in &controller.inner.buttons {
            controller.reflect_state(button);
            controller.attach_click(button)?;
        }

        log::info!("[Bookmark] Bound {} buttons", controller.inner.buttons.len());
        Ok(controller)
    }

    pub fn buttons(&self) -> &[BookmarkButton] {
        &self.inner.buttons
    }

    /// Update the element's class and label whenever its stored state changes.
    /// Server-rendered markup is left alone until then.
    fn reflect_state(&self, button: &BookmarkButton) {
        let store = self.inner.store;
        let config = Rc::clone(&self.inner.config);
        let element = button.element.clone();
        let id = button.id;

        let state = Memo::new(move |_| store_button_state(&store, id));
        Effect::new(move |prev: Option<Option<BookmarkState>>| {
            let next = state.get();
            if let Some(next) = next {
                if needs_reflect(prev.flatten(), next) {
                    if let Err(e) = dom::apply_state(&element, next, &config) {
                        log::error!("[Bookmark] Failed to update button {:?}: {}", id, e);
                    }
                }
            }
            next
        });
    }

    fn attach_click(&self, button: &BookmarkButton) -> Result<(), BookmarkError> {
        let controller = self.clone();
        let id = button.id;

        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            controller.toggle(id);
        });
        button
            .element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }

    /// Start an add/remove request for `id` based on its current state
    pub fn toggle(&self, id: ButtonId) {
        let inner = Rc::clone(&self.inner);
        // State is read now; a second click before the first settles sees the old state
        let (Some(button), Some(entry)) = (
            inner.buttons.iter().find(|b| b.id == id),
            store_button(&inner.store, id),
        ) else {
            log::warn!("[Bookmark] Click on unknown button {:?}", id);
            return;
        };
        let bookmark = dom::read_bookmark(&button.element);

        let running = store_begin_request(&inner.store, id);
        if running > 0 {
            log::warn!("[Bookmark] Button {:?} clicked with {} request(s) in flight", id, running);
        }

        spawn_local(async move {
            let message = run_toggle(
                inner.api.as_ref(),
                &inner.store,
                &inner.config,
                id,
                entry.state,
                &bookmark,
            )
            .await;
            inner.toaster.show(message);
        });
    }
}

/// Send the request for one click and settle the store.
/// Returns the toast text: the server's message, or the generic error.
pub(crate) async fn run_toggle<A>(
    api: &A,
    store: &BookmarkStore,
    config: &BookmarkConfig,
    id: ButtonId,
    state: BookmarkState,
    bookmark: &Bookmark,
) -> String
where
    A: BookmarkApi + ?Sized,
{
    let result = toggle_bookmark(api, state, bookmark).await;
    let message = match result {
        Ok(outcome) => {
            store_set_button_state(store, id, outcome.state);
            outcome.message
        }
        Err(e) => {
            log::error!("Error {} bookmark: {}", state.action().verb(), e);
            config.error_message.clone()
        }
    };
    store_finish_request(store, id);
    message
}

/// Keep the candidates not bound yet. `claim` marks one as bound and
/// returns false if it already was.
fn claim_unbound<T, E>(
    candidates: Vec<T>,
    mut claim: impl FnMut(&T) -> Result<bool, E>,
) -> Result<Vec<T>, E> {
    let mut claimed = Vec::new();
    for candidate in candidates {
        if claim(&candidate)? {
            claimed.push(candidate);
        }
    }
    Ok(claimed)
}

/// Only a change after the first observation touches the DOM
fn needs_reflect(prev: Option<BookmarkState>, next: BookmarkState) -> bool {
    matches!(prev, Some(prev) if prev != next)
}
