//! Application Context
//!
//! Shared services provided via Leptos Context API.

use habits_core::{FormSchema, HabitCreator, HabitsConfig};
use leptos::prelude::*;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Habit creator; holds `Rc`s so it stays on the local thread
    creator: StoredValue<HabitCreator, LocalStorage>,
    /// Validation schema of the new-habit form
    schema: StoredValue<FormSchema>,
    /// Landing page route
    pub login_route: StoredValue<String>,
    /// Habits home route
    pub habits_route: StoredValue<String>,
}

impl AppContext {
    pub fn new(creator: HabitCreator, config: &HabitsConfig) -> Self {
        Self {
            schema: StoredValue::new(FormSchema::habit(config)),
            login_route: StoredValue::new(config.login_route.clone()),
            habits_route: StoredValue::new(config.habits_route.clone()),
            creator: StoredValue::new_local(creator),
        }
    }

    pub fn creator(&self) -> HabitCreator {
        self.creator.get_value()
    }

    pub fn schema(&self) -> FormSchema {
        self.schema.get_value()
    }
}
