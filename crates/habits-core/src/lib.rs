//! Habits Core
//!
//! Everything behind the "Create New Habit" dialog that does not need a browser:
//! - domain: Habit and Entry records, identifiers, timestamps
//! - validation: declarative field rules for the dialog form
//! - submission: the dialog's submission state machine
//! - creator: the habit creation protocol over injected capabilities
//! - repository: document store trait and an in-memory implementation

pub mod capability;
pub mod config;
pub mod creator;
pub mod domain;
pub mod error;
pub mod repository;
pub mod submission;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod validation;

pub use capability::{
    Capabilities, Clock, IdentityProvider, Navigator, NotificationLevel, Notifier, StaticIdentity, SystemClock,
};
pub use config::{Backend, HabitsConfig};
pub use creator::{HabitCreator, SubmitOutcome};
pub use domain::{Document, DocumentId, Entry, Fields, Habit, Record, UserId};
pub use error::{ConfigError, CreateHabitError, StoreError};
pub use repository::{DocumentStore, MemoryStore};
pub use submission::{DialogModel, SubmissionState, SubmitRejected};
pub use validation::{FieldRules, FormSchema, ValidationError, ValidationErrorKind, ValidationReport};
