//! Dialog Submission State
//!
//! Finite-state model behind the "Create a New Habit" dialog. The UI renders
//! it; all transitions happen here.
//!
//! ```text
//!   Idle ──begin_submit──▶ Submitting ──finish──▶ Succeeded | FailedAuth | FailedWrite
//!    ▲                                                          │
//!    └──────────────────────────── open ────────────────────────┘
//! ```

use crate::creator::SubmitOutcome;
use crate::validation::{FormSchema, ValidationError, NAME_FIELD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    FailedAuth,
    FailedWrite,
}

/// Why `begin_submit` refused to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    AlreadySubmitting,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogModel {
    pub open: bool,
    pub state: SubmissionState,
    pub name: String,
    pub name_error: Option<ValidationError>,
    /// Set after a rejected attempt; from then on every edit re-validates
    revalidate: bool,
}

impl DialogModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Open the dialog. A finished submission goes back to idle.
    pub fn open(&mut self) {
        self.open = true;
        if !self.is_submitting() {
            self.state = SubmissionState::Idle;
        }
    }

    /// Close the dialog. Ignored while a submission is in flight.
    pub fn close(&mut self) {
        if !self.is_submitting() {
            self.open = false;
        }
    }

    /// Dialog `onOpenChange`
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    /// Edit the name field. The input is disabled while submitting.
    pub fn set_name(&mut self, name: impl Into<String>, schema: &FormSchema) {
        if self.is_submitting() {
            return;
        }
        self.name = name.into();
        if self.revalidate {
            self.name_error = schema.validate_field(NAME_FIELD, &self.name);
        }
    }

    /// Validate and enter `Submitting`, returning the name to create
    pub fn begin_submit(&mut self, schema: &FormSchema) -> Result<String, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }

        let report = schema.validate([(NAME_FIELD, self.name.as_str())]);
        self.name_error = report.error_for(NAME_FIELD).cloned();
        if let Some(err) = report.first_error() {
            self.revalidate = true;
            return Err(SubmitRejected::Invalid(err.clone()));
        }

        self.state = SubmissionState::Submitting;
        Ok(self.name.clone())
    }

    /// Apply the result of a submission.
    ///
    /// Always closes the dialog and leaves `Submitting`; the name is cleared only
    /// on success. Returns `false` when no submission was in flight.
    pub fn finish(&mut self, outcome: &SubmitOutcome) -> bool {
        if !self.is_submitting() {
            return false;
        }

        self.state = outcome.state();
        self.open = false;
        if self.state == SubmissionState::Succeeded {
            self.name.clear();
            self.name_error = None;
            self.revalidate = false;
        }
        true
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Saving..."
        } else {
            "Create"
        }
    }
}
