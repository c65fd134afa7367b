//! Property-based tests for name validation and the submit path
//!
//! Uses proptest to check the length rules hold for arbitrary input.

use std::rc::Rc;

use proptest::prelude::*;

use habits_core::testing::{RecordingNavigator, RecordingNotifier};
use habits_core::validation::NAME_FIELD;
use habits_core::{
    Capabilities, DialogModel, FormSchema, HabitCreator, HabitsConfig, MemoryStore, StaticIdentity, SubmitRejected,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Names the form must accept (2..=100 characters from the BMP)
fn valid_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 àéü]{2,100}").expect("valid regex")
}

/// Names shorter than the minimum
fn short_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,1}").expect("valid regex")
}

/// Names longer than the maximum
fn long_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{101,300}").expect("valid regex")
}

fn run<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(fut)
}

/// Drive the dialog the way the UI does: edit, submit, create, finish
fn submit_through_dialog(name: &str) -> (Result<String, SubmitRejected>, Rc<MemoryStore>) {
    let config = HabitsConfig::default();
    let schema = FormSchema::habit(&config);
    let store = Rc::new(MemoryStore::new());
    let creator = HabitCreator::new(
        Capabilities::new(
            Rc::new(StaticIdentity::new(Some("user-1"))),
            store.clone(),
            Rc::new(RecordingNavigator::default()),
            Rc::new(RecordingNotifier::default()),
        ),
        config,
    );

    let mut model = DialogModel::new();
    model.open();
    model.set_name(name, &schema);
    let started = model.begin_submit(&schema);
    if let Ok(name) = &started {
        let outcome = run(creator.submit(name));
        model.finish(&outcome);
    }
    (started, store)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every name within bounds validates
    #[test]
    fn valid_names_pass(name in valid_name_strategy()) {
        let schema = FormSchema::habit(&HabitsConfig::default());
        prop_assert!(schema.validate([(NAME_FIELD, name.as_str())]).is_valid());
    }

    /// Short names are rejected and nothing is written
    #[test]
    fn short_names_never_write(name in short_name_strategy()) {
        let (started, store) = submit_through_dialog(&name);
        prop_assert!(matches!(started, Err(SubmitRejected::Invalid(_))));
        prop_assert_eq!(store.writes(), 0);
    }

    /// Long names are rejected and nothing is written
    #[test]
    fn long_names_never_write(name in long_name_strategy()) {
        let (started, store) = submit_through_dialog(&name);
        prop_assert!(matches!(started, Err(SubmitRejected::Invalid(_))));
        prop_assert_eq!(store.writes(), 0);
    }

    /// Valid names proceed to exactly one habit and one entry
    #[test]
    fn valid_names_create_habit_and_entry(name in valid_name_strategy()) {
        let (started, store) = submit_through_dialog(&name);
        prop_assert_eq!(started, Ok(name));
        prop_assert_eq!(store.count("habits"), 1);
        prop_assert_eq!(store.count("entries"), 1);
    }
}
