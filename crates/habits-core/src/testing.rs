//! Test doubles for the capabilities
//!
//! Record what the habit creator asked for so tests can assert on it.

use std::cell::RefCell;

use chrono::{DateTime, Utc};

use crate::capability::{Clock, Navigator, NotificationLevel, Notifier};

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<(NotificationLevel, String)>>,
}

impl RecordingNotifier {
    /// Drain everything notified so far
    pub fn take(&self) -> Vec<(NotificationLevel, String)> {
        std::mem::take(&mut *self.sent.borrow_mut())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.sent.borrow_mut().push((level, message.to_string()));
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Panics on a malformed RFC 3339 timestamp; meant for test setup
    pub fn at(rfc3339: &str) -> Self {
        let at = DateTime::parse_from_rfc3339(rfc3339)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|e| panic!("bad timestamp {:?}: {}", rfc3339, e));
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
