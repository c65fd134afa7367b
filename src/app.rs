//! Habits Frontend App
//!
//! Root component: wires services into context and switches pages on the current path.

use habits_core::HabitsConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{HabitsHome, Landing, Toaster};
use crate::context::AppContext;
use crate::services::{self, location_path};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: HabitsConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new(location_path()));
    provide_context(store);

    // Services
    let creator = services::habit_creator(&config, store);
    let ctx = AppContext::new(creator, &config);
    provide_context(ctx);

    // Keep the page in sync with back/forward
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        *store.current_path().write() = location_path();
    });

    let page = move || {
        let path = store.current_path().get();
        tracing::debug!(path = %path, "Rendering page");
        if path == ctx.habits_route.get_value() {
            view! { <HabitsHome /> }.into_any()
        } else {
            view! { <Landing /> }.into_any()
        }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Habits"</h1>
            </header>

            <main class="main-content">{page}</main>

            <Toaster />
        </div>
    }
}
