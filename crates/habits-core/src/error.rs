//! Error types for habit creation

use thiserror::Error;

use crate::domain::DocumentId;

/// Failures reported by a document store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backend could not be reached (network, SDK not loaded)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Backend refused the write (permissions, quota)
    #[error("Write rejected: {0}")]
    Rejected(String),

    /// Record could not be converted to or from store fields
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: DocumentId },
}

/// Failure of the two-step habit + entry write
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreateHabitError {
    /// Habit write failed; nothing was persisted
    #[error("Failed to create habit: {0}")]
    Habit(#[source] StoreError),

    /// Habit was persisted but its initial entry was not
    #[error("Failed to create entry for habit {habit_id}: {source}")]
    Entry {
        habit_id: DocumentId,
        #[source]
        source: StoreError,
    },
}

impl CreateHabitError {
    /// Habit left behind without an entry, if any
    pub fn persisted_habit(&self) -> Option<&DocumentId> {
        match self {
            CreateHabitError::Habit(_) => None,
            CreateHabitError::Entry { habit_id, .. } => Some(habit_id),
        }
    }
}

/// Invalid or unreadable configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
