//! Habit Record
//!
//! A user-defined recurring activity. Written once by the dialog, never updated here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{iso_timestamp, Record, UserId};

/// Habit as persisted in the `habits` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Display name, already validated by the form schema
    pub name: String,
    /// Owning user
    pub user_id: UserId,
    /// ISO-8601 creation time
    pub created_at: String,
}

impl Habit {
    pub fn new(name: impl Into<String>, user_id: UserId, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            user_id,
            created_at: iso_timestamp(created_at),
        }
    }
}

impl Record for Habit {}
