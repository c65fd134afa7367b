//! Toaster Component
//!
//! Stack of notifications from the app store. Click a toast to dismiss it early.

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields, Toast};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <li
                            class=format!("toast toast-{}", toast.level.as_str())
                            role="status"
                            on:click=move |_| store_dismiss_toast(&store, id)
                        >
                            {toast.message}
                        </li>
                    }
                }
            />
        </ol>
    }
}
