//! Browser Services
//!
//! Capabilities the habit creator needs, bound to the browser: history-based
//! navigation and the toaster. Also picks the backend named in the config.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use habits_core::{
    Backend, Capabilities, DocumentStore, HabitCreator, HabitsConfig, IdentityProvider, MemoryStore,
    Navigator, NotificationLevel, Notifier, StaticIdentity,
};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::firebase::{FirebaseIdentity, FirestoreStore};
use crate::store::{store_dismiss_toast, store_push_toast, AppStateStoreFields, AppStore};

/// Path of the page as the browser reports it
pub fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Client-side navigation via `history.pushState`
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    store: AppStore,
}

impl BrowserNavigator {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let pushed = web_sys::window()
            .ok_or_else(|| JsValue::from_str("no window"))
            .and_then(|w| w.history())
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = pushed {
            tracing::warn!(path, error = ?e, "history.pushState failed");
        }
        *self.store.current_path().write() = path.to_string();
    }
}

/// Notifications shown as toasts that dismiss themselves
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: AppStore,
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(store: AppStore, duration_ms: u32) -> Self {
        Self { store, duration_ms }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        let id = store_push_toast(&self.store, level, message);
        let store = self.store;
        Timeout::new(self.duration_ms, move || store_dismiss_toast(&store, id)).forget();
    }
}

/// Wire the habit creator to the configured backend and the browser
pub fn habit_creator(config: &HabitsConfig, store: AppStore) -> HabitCreator {
    let (identity, documents): (Rc<dyn IdentityProvider>, Rc<dyn DocumentStore>) = match config.backend {
        Backend::Firebase => (Rc::new(FirebaseIdentity), Rc::new(FirestoreStore)),
        Backend::Memory => {
            tracing::info!(user = %config.demo_user, "Using in-memory store, nothing is persisted");
            (
                Rc::new(StaticIdentity::new(Some(&config.demo_user))),
                Rc::new(MemoryStore::new()),
            )
        }
    };

    let caps = Capabilities::new(
        identity,
        documents,
        Rc::new(BrowserNavigator::new(store)),
        Rc::new(ToastNotifier::new(store, config.toast_duration_ms)),
    );
    HabitCreator::new(caps, config.clone())
}
