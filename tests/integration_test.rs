#![cfg(all(
    feature = "predicate",
    feature = "props",
    feature = "dispatch",
    feature = "counter",
    feature = "log"
))]
//! Integration tests for combinars.
//!
//! These tests verify that combinators from different modules compose
//! across module boundaries the way an event-handling layer would use them.

use std::cell::{Cell, RefCell};

use combinars::Truthy;
use combinars::counter::every_count;
use combinars::dispatch::action_dispatcher;
use combinars::log::{LogRecord, log_with_logger};
use combinars::predicate::{each, not, when, when_else};
use combinars::props::{prop_equals, prop_exists};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Save(Value),
    Reject(String),
}

#[fixture]
fn valid_form() -> Value {
    json!({ "user": { "name": "Gabrielle", "email": "gab@example.com", "role": "editor" } })
}

#[fixture]
fn invalid_form() -> Value {
    json!({ "user": { "name": "", "role": "editor" } })
}

fn is_complete(form: &Value) -> bool {
    combinars::all!(
        prop_exists::<Value, _>("user.name"),
        prop_exists::<Value, _>("user.email"),
        not(prop_equals::<Value, _, _>("user.role", "banned")),
    )(form)
}

#[rstest]
fn submit_handler_routes_through_dispatcher(valid_form: Value, invalid_form: Value) {
    let store = RefCell::new(Vec::new());
    let dispatch = |action: Action| store.borrow_mut().push(action);

    let save = action_dispatcher(Action::Save)
        .map_args(|form: &Value| form.clone())
        .bind(&dispatch);
    let reject = action_dispatcher(Action::Reject)
        .map_args(|form: &Value| {
            format!(
                "incomplete form for {}",
                prop_exists::<Value, _>("user.role")(form).unwrap_or(Value::Null)
            )
        })
        .bind(&dispatch);

    let submit = when_else(is_complete, &save, &reject);

    submit(&valid_form);
    submit(&invalid_form);

    assert_eq!(
        *store.borrow(),
        vec![
            Action::Save(valid_form),
            Action::Reject(String::from("incomplete form for \"editor\"")),
        ]
    );
}

#[rstest]
fn logged_validation_reports_each_decision(valid_form: Value, invalid_form: Value) {
    let lines = RefCell::new(Vec::new());
    let log = log_with_logger(|record: &LogRecord<'_>| {
        lines.borrow_mut().push(format!("{} -> {:?}", record.message, record.output));
    });
    let validate = log.wrap("validate", is_complete);

    assert!(validate(&valid_form));
    assert!(!validate(&invalid_form));
    assert_eq!(*lines.borrow(), vec!["validate -> true", "validate -> false"]);
}

#[rstest]
fn autosave_fires_every_third_change(valid_form: Value) {
    let saves = Cell::new(0);
    let changes = Cell::new(0);
    let autosave = every_count(3, |_: &Value| saves.set(saves.get() + 1)).unwrap();
    let count_change = |_: &Value| changes.set(changes.get() + 1);
    let on_change = each(vec![&count_change as &dyn Fn(&Value), &autosave]);

    for _ in 0..7 {
        on_change(&valid_form);
    }

    assert_eq!(changes.get(), 7);
    assert_eq!(saves.get(), 2);
}

#[rstest]
fn optional_greeting_from_property(valid_form: Value) {
    let greet = when(prop_exists::<Value, _>("user.name"), |form: &Value| {
        format!("hello {}", form["user"]["name"].as_str().unwrap_or_default())
    });

    assert_eq!(greet(&valid_form), Some(String::from("hello Gabrielle")));
    assert_eq!(greet(&json!({})), None);
    assert!(greet(&json!({ "user": { "name": "" } })).is_falsy());
}
