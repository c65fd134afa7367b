//! Entry Record
//!
//! One tracking period of a habit. The dialog writes the first one right after the habit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{iso_timestamp, DocumentId, Record, UserId};

/// Entry as persisted in the `entries` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Id of the owning habit (no back-reference is stored on the habit)
    pub habit_id: DocumentId,
    pub user_id: UserId,
    pub created_at: String,
    pub completed: bool,
}

impl Entry {
    /// First, not yet completed entry of a freshly created habit
    pub fn initial(habit_id: DocumentId, user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            habit_id,
            user_id,
            created_at: iso_timestamp(created_at),
            completed: false,
        }
    }
}

impl Record for Entry {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_entry_is_not_completed() {
        let entry = Entry::initial(DocumentId::new("h1"), UserId::new("u1"), Utc::now());
        assert!(!entry.completed);

        let fields = entry.to_fields().unwrap();
        assert_eq!(fields["habitId"], "h1");
        assert_eq!(fields["userId"], "u1");
        assert_eq!(fields["completed"], false);
        assert!(fields["createdAt"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_entry_reads_back_from_fields() {
        let entry = Entry::initial(DocumentId::new("h9"), UserId::new("u9"), Utc::now());
        let back = Entry::from_fields(entry.to_fields().unwrap()).unwrap();
        assert_eq!(back, entry);
    }
}
