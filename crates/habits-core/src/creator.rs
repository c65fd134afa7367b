//! Habit Creation
//!
//! The submit sequence of the new-habit dialog: identity check, habit write,
//! entry write, then user feedback and navigation.

use tracing::{debug, error, info, warn};

use crate::capability::{Capabilities, NotificationLevel};
use crate::config::HabitsConfig;
use crate::domain::{Document, DocumentId, Entry, Habit, Record, UserId};
use crate::error::{CreateHabitError, StoreError};
use crate::submission::SubmissionState;

pub const MSG_LOGIN_REQUIRED: &str = "You must be logged in to create a habit.";
pub const MSG_CREATED: &str = "Habit created successfully!";
pub const MSG_FAILED: &str = "Something went wrong. Please try again.";

/// How a submission ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created {
        habit: Document<Habit>,
        entry: Document<Entry>,
    },
    /// Nobody signed in; nothing was written
    Unauthenticated,
    WriteFailed {
        error: CreateHabitError,
        /// Habit still persisted without its entry (compensation off or failed)
        orphan: Option<DocumentId>,
    },
}

impl SubmitOutcome {
    pub fn state(&self) -> SubmissionState {
        match self {
            SubmitOutcome::Created { .. } => SubmissionState::Succeeded,
            SubmitOutcome::Unauthenticated => SubmissionState::FailedAuth,
            SubmitOutcome::WriteFailed { .. } => SubmissionState::FailedWrite,
        }
    }
}

/// Runs habit submissions against injected capabilities
#[derive(Clone)]
pub struct HabitCreator {
    caps: Capabilities,
    config: HabitsConfig,
}

impl HabitCreator {
    pub fn new(caps: Capabilities, config: HabitsConfig) -> Self {
        Self { caps, config }
    }

    pub fn config(&self) -> &HabitsConfig {
        &self.config
    }

    /// Submit a validated habit name.
    ///
    /// Notifies the user and navigates as appropriate; never returns an error,
    /// failures are reported through the outcome.
    pub async fn submit(&self, name: &str) -> SubmitOutcome {
        self.submit_with(name, |_| {}).await
    }

    /// Like [`submit`](Self::submit), but calls `on_settled` with the outcome
    /// before any notification or navigation happens. The dialog closes and
    /// resets there, so it is done before navigation can unmount it.
    pub async fn submit_with<F>(&self, name: &str, on_settled: F) -> SubmitOutcome
    where
        F: FnOnce(&SubmitOutcome),
    {
        let outcome = self.run(name).await;
        on_settled(&outcome);
        self.report(&outcome);
        outcome
    }

    /// Identity check and writes; no user-facing effects
    async fn run(&self, name: &str) -> SubmitOutcome {
        let Some(user) = self.caps.identity.current_user() else {
            warn!("Habit submitted without a signed-in user");
            return SubmitOutcome::Unauthenticated;
        };

        match self.create_habit(&user, name).await {
            Ok((habit, entry)) => {
                info!(habit_id = %habit.id, entry_id = %entry.id, user = %user, "Habit created");
                SubmitOutcome::Created { habit, entry }
            }
            Err(err) => {
                error!(error = %err, user = %user, "Error creating habit");
                let orphan = self.compensate(&err).await;
                SubmitOutcome::WriteFailed { error: err, orphan }
            }
        }
    }

    /// Notification and navigation for a finished submission
    fn report(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Created { .. } => {
                self.caps.notifier.notify(NotificationLevel::Success, MSG_CREATED);
                self.caps.navigator.navigate(&self.config.habits_route);
            }
            SubmitOutcome::Unauthenticated => {
                self.caps.notifier.notify(NotificationLevel::Error, MSG_LOGIN_REQUIRED);
                self.caps.navigator.navigate(&self.config.login_route);
            }
            SubmitOutcome::WriteFailed { .. } => {
                self.caps.notifier.notify(NotificationLevel::Error, MSG_FAILED);
            }
        }
    }

    /// Write the habit, then its initial entry. The entry write never starts
    /// before the habit write has resolved.
    pub async fn create_habit(
        &self,
        user: &UserId,
        name: &str,
    ) -> Result<(Document<Habit>, Document<Entry>), CreateHabitError> {
        let habit = Habit::new(name, user.clone(), self.caps.clock.now());
        let fields = habit.to_fields().map_err(CreateHabitError::Habit)?;
        let habit_id = self
            .caps
            .store
            .create_document(&self.config.habits_collection, fields)
            .await
            .map_err(CreateHabitError::Habit)?;
        debug!(habit_id = %habit_id, "Habit document written");

        let entry = Entry::initial(habit_id.clone(), user.clone(), self.caps.clock.now());
        let entry_failed = |source: StoreError| CreateHabitError::Entry {
            habit_id: habit_id.clone(),
            source,
        };
        let fields = entry.to_fields().map_err(entry_failed)?;
        let entry_id = self
            .caps
            .store
            .create_document(&self.config.entries_collection, fields)
            .await
            .map_err(entry_failed)?;
        debug!(entry_id = %entry_id, "Entry document written");

        Ok((Document::new(habit_id, habit), Document::new(entry_id, entry)))
    }

    /// Undo a habit whose entry failed. Returns the id still left behind, if any.
    async fn compensate(&self, err: &CreateHabitError) -> Option<DocumentId> {
        let habit_id = err.persisted_habit()?;

        if !self.config.compensate_orphans {
            warn!(habit_id = %habit_id, "Habit left without its initial entry");
            return Some(habit_id.clone());
        }

        match self
            .caps
            .store
            .delete_document(&self.config.habits_collection, habit_id)
            .await
        {
            Ok(()) => {
                info!(habit_id = %habit_id, "Removed habit whose initial entry failed");
                None
            }
            Err(delete_err) => {
                error!(habit_id = %habit_id, error = %delete_err, "Could not remove habit without entry");
                Some(habit_id.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::repository::MemoryStore;
    use crate::capability::StaticIdentity;
    use crate::testing::{FixedClock, RecordingNavigator, RecordingNotifier};

    struct Harness {
        store: Rc<MemoryStore>,
        navigator: Rc<RecordingNavigator>,
        notifier: Rc<RecordingNotifier>,
        creator: HabitCreator,
    }

    fn harness(user: Option<&str>, config: HabitsConfig) -> Harness {
        let store = Rc::new(MemoryStore::new());
        let navigator = Rc::new(RecordingNavigator::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let caps = Capabilities::new(
            Rc::new(StaticIdentity::new(user)),
            store.clone(),
            navigator.clone(),
            notifier.clone(),
        )
        .with_clock(Rc::new(FixedClock::at("2024-03-01T08:30:00Z")));
        Harness {
            store,
            navigator,
            notifier,
            creator: HabitCreator::new(caps, config),
        }
    }

    #[tokio::test]
    async fn test_success_writes_habit_then_entry() {
        let h = harness(Some("user-1"), HabitsConfig::default());

        let outcome = h.creator.submit("Read for 30 minutes").await;

        let SubmitOutcome::Created { habit, entry } = outcome else {
            panic!("expected Created, got {:?}", outcome);
        };
        assert_eq!(habit.data.name, "Read for 30 minutes");
        assert_eq!(habit.data.user_id, UserId::new("user-1"));
        assert_eq!(habit.data.created_at, "2024-03-01T08:30:00.000Z");
        assert_eq!(entry.data.habit_id, habit.id);
        assert!(!entry.data.completed);

        assert_eq!(h.store.count("habits"), 1);
        assert_eq!(h.store.count("entries"), 1);
        let stored: Vec<(DocumentId, Entry)> = h.store.list("entries").unwrap();
        assert_eq!(stored[0].1.habit_id, habit.id);

        assert_eq!(h.notifier.take(), vec![(NotificationLevel::Success, MSG_CREATED.to_string())]);
        assert_eq!(h.navigator.paths(), vec!["/home/habits".to_string()]);
    }

    #[tokio::test]
    async fn test_unauthenticated_writes_nothing() {
        let h = harness(None, HabitsConfig::default());

        let outcome = h.creator.submit("Read").await;

        assert_eq!(outcome, SubmitOutcome::Unauthenticated);
        assert_eq!(h.store.writes(), 0);
        assert_eq!(h.notifier.take(), vec![(NotificationLevel::Error, MSG_LOGIN_REQUIRED.to_string())]);
        assert_eq!(h.navigator.paths(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_habit_write_failure_creates_no_entry() {
        let h = harness(Some("user-1"), HabitsConfig::default());
        h.store.fail_creates_in("habits", StoreError::Unavailable("offline".into()));

        let outcome = h.creator.submit("Read").await;

        assert_eq!(
            outcome,
            SubmitOutcome::WriteFailed {
                error: CreateHabitError::Habit(StoreError::Unavailable("offline".into())),
                orphan: None,
            }
        );
        assert_eq!(h.store.count("entries"), 0);
        assert_eq!(h.notifier.take(), vec![(NotificationLevel::Error, MSG_FAILED.to_string())]);
        assert!(h.navigator.paths().is_empty());
    }

    #[tokio::test]
    async fn test_entry_failure_removes_habit() {
        let h = harness(Some("user-1"), HabitsConfig::default());
        h.store.fail_creates_in("entries", StoreError::Rejected("quota".into()));

        let outcome = h.creator.submit("Read").await;

        let SubmitOutcome::WriteFailed { error, orphan } = outcome else {
            panic!("expected WriteFailed");
        };
        assert!(matches!(error, CreateHabitError::Entry { .. }));
        assert_eq!(orphan, None);
        assert_eq!(h.store.count("habits"), 0);
        assert_eq!(h.store.count("entries"), 0);
        assert_eq!(h.notifier.take(), vec![(NotificationLevel::Error, MSG_FAILED.to_string())]);
    }

    #[tokio::test]
    async fn test_entry_failure_reports_orphan_when_delete_fails() {
        let h = harness(Some("user-1"), HabitsConfig::default());
        h.store.fail_creates_in("entries", StoreError::Rejected("quota".into()));
        h.store.fail_deletes(StoreError::Unavailable("offline".into()));

        let outcome = h.creator.submit("Read").await;

        let SubmitOutcome::WriteFailed { error, orphan } = outcome else {
            panic!("expected WriteFailed");
        };
        assert_eq!(orphan.as_ref(), error.persisted_habit());
        assert!(orphan.is_some());
        assert_eq!(h.store.count("habits"), 1);
        assert_eq!(h.store.count("entries"), 0);
    }

    #[tokio::test]
    async fn test_entry_failure_without_compensation_keeps_habit() {
        let config = HabitsConfig {
            compensate_orphans: false,
            ..HabitsConfig::default()
        };
        let h = harness(Some("user-1"), config);
        h.store.fail_creates_in("entries", StoreError::Rejected("quota".into()));

        let outcome = h.creator.submit("Read").await;

        assert!(matches!(outcome, SubmitOutcome::WriteFailed { orphan: Some(_), .. }));
        assert_eq!(h.store.count("habits"), 1);
        assert_eq!(h.store.count("entries"), 0);
        assert_eq!(h.notifier.take(), vec![(NotificationLevel::Error, MSG_FAILED.to_string())]);
    }

    #[tokio::test]
    async fn test_settle_runs_before_feedback_and_navigation() {
        for user in [Some("user-1"), None] {
            let h = harness(user, HabitsConfig::default());
            let mut settled = None;

            let outcome = h
                .creator
                .submit_with("Read", |outcome| {
                    assert!(h.navigator.paths().is_empty(), "navigated before settle");
                    assert!(h.notifier.take().is_empty(), "notified before settle");
                    settled = Some(outcome.state());
                })
                .await;

            assert_eq!(settled, Some(outcome.state()));
            assert_eq!(h.navigator.paths().len(), 1);
            assert_eq!(h.notifier.take().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_custom_collections_and_routes() {
        let config = HabitsConfig {
            habits_collection: "h".into(),
            entries_collection: "e".into(),
            habits_route: "/dashboard".into(),
            ..HabitsConfig::default()
        };
        let h = harness(Some("user-2"), config);

        h.creator.submit("Walk").await;

        assert_eq!((h.store.count("h"), h.store.count("e")), (1, 1));
        assert_eq!(h.navigator.paths(), vec!["/dashboard".to_string()]);
    }
}
