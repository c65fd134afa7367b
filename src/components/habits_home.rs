//! Habits Home
//!
//! Landing spot after a habit is created.

use leptos::prelude::*;

use super::NewHabitDialog;

#[component]
pub fn HabitsHome() -> impl IntoView {
    view! {
        <section class="habits-home">
            <div class="section-header">
                <h2>"Your Habits"</h2>
                <NewHabitDialog />
            </div>
            <p class="hint">"Track something small every day. Each new habit starts with an open entry for today."</p>
        </section>
    }
}
