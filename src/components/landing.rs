//! Landing Page
//!
//! Shown at the root route and for unknown paths.

use habits_core::Navigator;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::services::BrowserNavigator;
use crate::store::use_app_store;

#[component]
pub fn Landing() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let habits_route = ctx.habits_route.get_value();

    view! {
        <section class="landing">
            <h2>"Build habits that stick"</h2>
            <p>"Sign in with your account to start tracking habits."</p>
            <a
                class="btn btn-primary"
                href=habits_route.clone()
                on:click=move |ev| {
                    ev.prevent_default();
                    BrowserNavigator::new(store).navigate(&habits_route);
                }
            >
                "Go to my habits"
            </a>
        </section>
    }
}
