//! Habits Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod firebase;
mod logging;
mod services;
mod store;

use app::App;
use habits_core::HabitsConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (HabitsConfig::default(), Some(e)),
    };
    logging::init(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Falling back to default config");
    }
    tracing::info!(backend = ?config.backend, "Starting habits frontend");

    mount_to_body(move || view! { <App config=config /> });
}
