//! UI Components
//!
//! Reusable Leptos components.

mod habits_home;
mod landing;
mod new_habit_dialog;
mod toaster;

pub use habits_home::HabitsHome;
pub use landing::Landing;
pub use new_habit_dialog::NewHabitDialog;
pub use toaster::Toaster;
