//! New Habit Dialog Component
//!
//! Trigger button plus modal form for creating a habit. All state lives in a
//! `DialogModel`; this component renders it and forwards events.

use habits_core::{DialogModel, SubmitRejected};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;

const NAME_INPUT_ID: &str = "new-habit-name";

/// "Create New Habit" button and its dialog
#[component]
pub fn NewHabitDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let model = RwSignal::new(DialogModel::new());
    let submitting = Memo::new(move |_| model.with(|m| m.is_submitting()));
    let is_open = Memo::new(move |_| model.with(|m| m.open));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let schema = ctx.schema();
        let name = match model.try_update(|m| m.begin_submit(&schema)) {
            Some(Ok(name)) => name,
            Some(Err(SubmitRejected::Invalid(err))) => {
                tracing::debug!(field = %err.field, message = %err.message, "New habit form rejected");
                return;
            }
            Some(Err(SubmitRejected::AlreadySubmitting)) | None => return,
        };

        let creator = ctx.creator();
        spawn_local(async move {
            // Settle before navigating: a route change unmounts this component.
            creator
                .submit_with(&name, |outcome| {
                    model.update(|m| {
                        m.finish(outcome);
                    });
                })
                .await;
        });
    };

    view! {
        <button
            type="button"
            class="btn btn-primary"
            disabled=move || submitting.get()
            on:click=move |_| model.update(|m| m.open())
        >
            "Create New Habit"
        </button>

        <Show when=move || is_open.get()>
            <div
                class="dialog-overlay"
                on:click=move |_| model.update(|m| m.close())
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        model.update(|m| m.close());
                    }
                }
            >
                <div
                    class="dialog-content"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="new-habit-title"
                    on:click=|ev| ev.stop_propagation()
                >
                    <header class="dialog-header">
                        <h2 id="new-habit-title" class="dialog-title">"Create a New Habit"</h2>
                        <button
                            type="button"
                            class="dialog-close"
                            aria-label="Close"
                            disabled=move || submitting.get()
                            on:click=move |_| model.update(|m| m.close())
                        >
                            "×"
                        </button>
                    </header>

                    <form class="habit-form" on:submit=on_submit>
                        <div class="form-item">
                            <label for=NAME_INPUT_ID class="form-label">"Name"</label>
                            <input
                                id=NAME_INPUT_ID
                                type="text"
                                class="form-input"
                                placeholder="Read for 30 minutes"
                                autofocus=true
                                prop:value=move || model.with(|m| m.name.clone())
                                disabled=move || submitting.get()
                                aria-invalid=move || model.with(|m| m.name_error.is_some()).to_string()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    let schema = ctx.schema();
                                    model.update(|m| m.set_name(value, &schema));
                                }
                            />
                            <p class="form-description">
                                "The name of the habit you want to track. For example, \"Read for 30 minutes\" or \"Exercise for 30 minutes\""
                            </p>
                            {move || {
                                model
                                    .with(|m| m.name_error.as_ref().map(|err| err.message.clone()))
                                    .map(|message| view! { <p class="form-message">{message}</p> })
                            }}
                        </div>

                        <button
                            type="submit"
                            class=move || {
                                if submitting.get() { "btn btn-primary btn-block pulse" } else { "btn btn-primary btn-block" }
                            }
                            disabled=move || submitting.get()
                        >
                            <Show when=move || submitting.get()>
                                <span class="spinner" aria-hidden="true"></span>
                            </Show>
                            {move || model.with(|m| m.submit_label())}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
