//! Bookmark UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{BookmarkState, ButtonId};

/// One bound bookmark button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonEntry {
    pub id: ButtonId,
    pub state: BookmarkState,
    /// Requests started and not yet settled
    pub in_flight: u32,
}

/// State of every bound button
#[derive(Clone, Debug, Default, Store)]
pub struct BookmarkUiState {
    pub buttons: Vec<ButtonEntry>,
}

/// Type alias for the store
pub type BookmarkStore = Store<BookmarkUiState>;

// ========================
// Store Helper Functions
// ========================

/// Register a newly bound button
pub fn store_add_button(store: &BookmarkStore, entry: ButtonEntry) {
    store.buttons().write().push(entry);
}

pub fn store_button_count(store: &BookmarkStore) -> usize {
    store.buttons().read_untracked().len()
}

/// Snapshot of a button's entry, without tracking
pub fn store_button(store: &BookmarkStore, id: ButtonId) -> Option<ButtonEntry> {
    store.buttons().read_untracked().iter().find(|b| b.id == id).cloned()
}

/// Current state of a button (tracked; wrap in a `Memo` so in-flight
/// bookkeeping on other entries does not wake the caller)
pub fn store_button_state(store: &BookmarkStore, id: ButtonId) -> Option<BookmarkState> {
    store.buttons().read().iter().find(|b| b.id == id).map(|b| b.state)
}

pub fn store_set_button_state(store: &BookmarkStore, id: ButtonId, state: BookmarkState) {
    store.buttons().write().iter_mut()
        .find(|b| b.id == id)
        .map(|b| b.state = state);
}

/// Mark a request as started; returns how many were already running
pub fn store_begin_request(store: &BookmarkStore, id: ButtonId) -> u32 {
    let binding = store.buttons();
    let mut buttons = binding.write();
    match buttons.iter_mut().find(|b| b.id == id) {
        Some(entry) => {
            let running = entry.in_flight;
            entry.in_flight += 1;
            running
        }
        None => 0,
    }
}

pub fn store_finish_request(store: &BookmarkStore, id: ButtonId) {
    store.buttons().write().iter_mut()
        .find(|b| b.id == id)
        .map(|b| b.in_flight = b.in_flight.saturating_sub(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> BookmarkStore {
        let owner = Owner::new();
        owner.set();
        // keep the reactive owner alive for the rest of the test
        std::mem::forget(owner);
        let store = Store::new(BookmarkUiState::default());
        for i in 0..2 {
            store_add_button(&store, ButtonEntry {
                id: ButtonId(i),
                state: BookmarkState::NotBookmarked,
                in_flight: 0,
            });
        }
        store
    }

    #[test]
    fn test_set_state_only_touches_one_button() {
        let store = setup_store();

        store_set_button_state(&store, ButtonId(1), BookmarkState::Bookmarked);

        assert_eq!(store_button(&store, ButtonId(0)).unwrap().state, BookmarkState::NotBookmarked);
        assert_eq!(store_button(&store, ButtonId(1)).unwrap().state, BookmarkState::Bookmarked);
        assert_eq!(store_button_state(&store, ButtonId(1)), Some(BookmarkState::Bookmarked));
    }

    #[test]
    fn test_unknown_button() {
        let store = setup_store();

        assert_eq!(store_button_count(&store), 2);
        assert!(store_button(&store, ButtonId(7)).is_none());
        assert_eq!(store_begin_request(&store, ButtonId(7)), 0);
    }

    #[test]
    fn test_in_flight_accounting() {
        let store = setup_store();

        assert_eq!(store_begin_request(&store, ButtonId(0)), 0);
        assert_eq!(store_begin_request(&store, ButtonId(0)), 1);
        store_finish_request(&store, ButtonId(0));
        store_finish_request(&store, ButtonId(0));
        store_finish_request(&store, ButtonId(0));

        assert_eq!(store_button(&store, ButtonId(0)).unwrap().in_flight, 0);
    }
}
