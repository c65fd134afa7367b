//! Capabilities
//!
//! The outside services the habit dialog calls. Browser builds bind them to the
//! auth SDK, history and the toaster; tests bind them to the doubles in `testing`.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserId;
use crate::repository::DocumentStore;

/// Source of the signed-in user
pub trait IdentityProvider {
    /// Current user, or `None` when nobody is signed in
    fn current_user(&self) -> Option<UserId>;
}

/// Identity provider with a user set by the host (memory backend, tests)
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: RefCell<Option<UserId>>,
}

impl StaticIdentity {
    pub fn new(user: Option<&str>) -> Self {
        Self {
            user: RefCell::new(user.map(UserId::new)),
        }
    }

    pub fn sign_in(&self, user: &str) {
        *self.user.borrow_mut() = Some(UserId::new(user));
    }

    pub fn sign_out(&self) {
        *self.user.borrow_mut() = None;
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user.borrow().clone()
    }
}

/// Client-side navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Error => "error",
        }
    }
}

/// User-facing notification surface
pub trait Notifier {
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// Wall clock, injectable so timestamps are deterministic in tests
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Everything the habit creator needs from the outside world
#[derive(Clone)]
pub struct Capabilities {
    pub identity: Rc<dyn IdentityProvider>,
    pub store: Rc<dyn DocumentStore>,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
    pub clock: Rc<dyn Clock>,
}

impl Capabilities {
    /// Capabilities using the system clock
    pub fn new(
        identity: Rc<dyn IdentityProvider>,
        store: Rc<dyn DocumentStore>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            identity,
            store,
            navigator,
            notifier,
            clock: Rc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
