//! Domain Layer
//!
//! Records written by the habit dialog and the identifiers that link them.
//! Only serde and chrono here; storage lives behind `repository`.

mod entity;
mod entry;
mod habit;

pub use entity::{iso_timestamp, Document, DocumentId, Fields, Record, UserId};
pub use entry::Entry;
pub use habit::Habit;
