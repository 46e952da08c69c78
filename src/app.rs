//! Bookmark Toggle Frontend App
//!
//! Binds the server-rendered bookmark buttons and hosts the toasts.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_toast::{ToastHost, ToastOptions, Toaster};
use reactive_stores::Store;

use crate::api::{BookmarkApi, HttpBookmarkApi};
use crate::config::{BookmarkConfig, API_BASE_META};
use crate::controller::BookmarkController;
use crate::dom;
use crate::store::BookmarkUiState;

#[component]
pub fn App() -> impl IntoView {
    let document = dom::document();
    let api_base = document.as_ref().ok().and_then(|d| dom::meta_content(d, API_BASE_META));
    let config = Rc::new(BookmarkConfig::default().with_api_base(api_base));

    let toaster = Toaster::new(ToastOptions {
        display_ms: config.toast_display_ms,
        ..ToastOptions::default()
    });
    let store = Store::new(BookmarkUiState::default());

    match document {
        Ok(document) => {
            let api: Rc<dyn BookmarkApi> = Rc::new(HttpBookmarkApi::new(&config));
            match BookmarkController::bind(&document, config, store, toaster, api) {
                Ok(controller) if controller.buttons().is_empty() => {
                    log::debug!("[APP] No bookmark buttons on this page");
                }
                Ok(_) => {}
                Err(e) => log::error!("[APP] Failed to bind bookmark buttons: {}", e),
            }
        }
        Err(e) => log::error!("[APP] {}", e),
    }

    view! { <ToastHost toaster=toaster /> }
}
