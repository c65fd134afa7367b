//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use habits_core::NotificationLevel;
use leptos::prelude::*;
use reactive_stores::Store;

/// A notification shown by the toaster
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Path the page is showing, kept in sync with browser history
    pub current_path: String,
    /// Visible notifications, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u64,
}

impl AppState {
    pub fn new(current_path: String) -> Self {
        Self {
            current_path,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a toast, returning its id
pub fn store_push_toast(store: &AppStore, level: NotificationLevel, message: &str) -> u64 {
    let next_id = store.next_toast_id();
    let id = {
        let mut next = next_id.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        level,
        message: message.to_string(),
    });
    id
}

/// Remove a toast by id (no-op if already dismissed)
pub fn store_dismiss_toast(store: &AppStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_ids_increase_and_dismiss_removes_one() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new("/".to_string()));

        let first = store_push_toast(&store, NotificationLevel::Success, "Habit created successfully!");
        let second = store_push_toast(&store, NotificationLevel::Error, "Something went wrong. Please try again.");
        assert_eq!((first, second), (1, 2));
        assert_eq!(store.toasts().get_untracked().len(), 2);

        store_dismiss_toast(&store, first);
        store_dismiss_toast(&store, first);
        let left = store.toasts().get_untracked();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, second);
        assert_eq!(left[0].level, NotificationLevel::Error);
    }
}
