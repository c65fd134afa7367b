//! Frontend Configuration
//!
//! Routes, collection names and form limits. Every field has a default so an
//! empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which document store the frontend talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Hosted document database through the browser SDK
    #[default]
    Firebase,
    /// In-process store with a fixed demo user, nothing leaves the page
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitsConfig {
    /// Where unauthenticated users are sent
    pub login_route: String,
    /// Habits listing, shown after a habit is created
    pub habits_route: String,
    pub habits_collection: String,
    pub entries_collection: String,
    pub name_min_len: usize,
    pub name_max_len: usize,
    pub toast_duration_ms: u32,
    /// `tracing` level filter for the console subscriber
    pub log_level: String,
    /// Delete a habit whose initial entry could not be written
    pub compensate_orphans: bool,
    pub backend: Backend,
    /// User reported by the memory backend
    pub demo_user: String,
}

impl Default for HabitsConfig {
    fn default() -> Self {
        Self {
            login_route: "/".to_string(),
            habits_route: "/home/habits".to_string(),
            habits_collection: "habits".to_string(),
            entries_collection: "entries".to_string(),
            name_min_len: 2,
            name_max_len: 100,
            toast_duration_ms: 4000,
            log_level: "info".to_string(),
            compensate_orphans: true,
            backend: Backend::Firebase,
            demo_user: "demo-user".to_string(),
        }
    }
}

impl HabitsConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HabitsConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name_min_len == 0 {
            return Err(ConfigError::Invalid("name_min_len must be at least 1".into()));
        }
        if self.name_min_len > self.name_max_len {
            return Err(ConfigError::Invalid(format!(
                "name_min_len ({}) exceeds name_max_len ({})",
                self.name_min_len, self.name_max_len
            )));
        }
        for (key, route) in [("login_route", &self.login_route), ("habits_route", &self.habits_route)] {
            if !route.starts_with('/') {
                return Err(ConfigError::Invalid(format!("{} must start with '/': {}", key, route)));
            }
        }
        for (key, name) in [
            ("habits_collection", &self.habits_collection),
            ("entries_collection", &self.entries_collection),
        ] {
            if name.is_empty() || name.contains('/') {
                return Err(ConfigError::Invalid(format!("{} is not a collection name: {:?}", key, name)));
            }
        }
        Ok(())
    }
}
