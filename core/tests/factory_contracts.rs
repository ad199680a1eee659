//! End-to-end checks of the three factories working together.

#![allow(clippy::expect_used)] // Test code can use expect

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use reducer_sauce_core::error::{CONFIG_EMPTY, CONFIG_REQUIRED, TYPES_REQUIRED};
use reducer_sauce_core::naming::to_tag;
use reducer_sauce_core::*;
use serde_json::{Value, json};

fn counter() -> DispatchReducer<i64> {
    create_reducer(
        0,
        HandlerMap::new().on("INCREMENT", |state: i64, action: &Action| {
            state + action.get("amount").and_then(Value::as_i64).unwrap_or(0)
        }),
    )
}

#[test]
fn types_reject_empty_input() {
    let err = create_types("").expect_err("empty input must fail");
    assert_eq!(err.to_string(), TYPES_REQUIRED);
}

#[test]
fn tag_conversion_examples() {
    assert_eq!(to_tag("addTodo"), "ADD_TODO");
    assert_eq!(to_tag("todo"), "TODO");
    assert_eq!(to_tag("a"), "A");
}

#[test]
fn creators_from_config() {
    let actions = create_actions(
        ActionConfig::new()
            .fields("addTodo", ["text"])
            .fields("reset", [] as [&str; 0])
            .custom("shout", |args| {
                Action::new("CUSTOM").with("payload", args.first().cloned().unwrap_or_default())
            }),
    )
    .expect("valid config");

    assert_eq!(actions.types.get("addTodo"), Some("ADD_TODO"));
    assert_eq!(
        actions.creators.create("addTodo", &[json!("buy milk")]).map(Value::from),
        Some(json!({ "type": "ADD_TODO", "text": "buy milk" }))
    );
    assert_eq!(
        actions.creators.create("reset", &[]).map(Value::from),
        Some(json!({ "type": "RESET" }))
    );
    assert_eq!(
        actions.creators.create("shout", &[json!("x")]).map(Value::from),
        Some(json!({ "type": "CUSTOM", "payload": "x" }))
    );
    assert!(actions.creators.create("missing", &[]).is_none());
}

#[test]
fn actions_reject_empty_and_null_config() {
    let err = create_actions(ActionConfig::new()).expect_err("empty config must fail");
    assert_eq!(err.to_string(), CONFIG_EMPTY);

    let err = ActionConfig::from_value(&Value::Null).expect_err("null config must fail");
    assert_eq!(err.to_string(), CONFIG_REQUIRED);
}

#[test]
fn reducer_dispatch_contract() {
    let reducer = counter();

    assert_eq!(reducer.reduce(None, None), 0);
    assert_eq!(reducer.reduce(Some(5), Some(&Action::new("UNKNOWN"))), 5);
    assert_eq!(
        reducer.reduce(Some(5), Some(&Action::new("INCREMENT").with("amount", 3))),
        8
    );
    let untyped: Action = serde_json::from_value(json!({})).expect("empty object is a record");
    assert_eq!(reducer.reduce(Some(5), Some(&untyped)), 5);
}

#[test]
fn reducer_builder_preconditions() {
    let err = ReducerBuilder::<i64>::new()
        .handlers(HandlerMap::new())
        .build()
        .expect_err("missing initial state must fail");
    assert_eq!(err.to_string(), "initial state is required");

    let err = ReducerBuilder::new()
        .initial_state(0_i64)
        .build()
        .expect_err("missing handlers must fail");
    assert_eq!(err.to_string(), "handlers must be an object");

    assert!(
        ReducerBuilder::new()
            .initial_state(0_i64)
            .handlers(HandlerMap::new())
            .build()
            .is_ok()
    );
}

#[test]
fn types_from_config_drive_handlers() {
    let Actions { types, creators } = create_actions(
        ActionConfig::from_json_str(r#"{ "increment": ["amount"], "reset": null }"#)
            .expect("valid json"),
    )
    .expect("valid config");

    let handlers = HandlerMap::new()
        .on(&types["increment"], |state: i64, action: &Action| {
            state + action.get("amount").and_then(Value::as_i64).unwrap_or(0)
        })
        .on(&types["reset"], |_: i64, _: &Action| 0);
    let reducer = create_reducer(0, handlers);

    let state = [
        creators.create("increment", &[json!(2)]),
        creators.create("increment", &[json!(5)]),
    ]
    .iter()
    .fold(0, |state, action| reducer.reduce(Some(state), action.as_ref()));
    assert_eq!(state, 7);

    let state = reducer.reduce(Some(state), creators.create("reset", &[]).as_ref());
    assert_eq!(state, 0);
}

#[test]
fn reducer_shared_across_threads() {
    let reducer = Arc::new(counter());
    let action = Action::new("INCREMENT").with("amount", 1);

    let handles: Vec<_> = (0..4)
        .map(|start| {
            let reducer = Arc::clone(&reducer);
            let action = action.clone();
            thread::spawn(move || reducer.dispatch(start, &action))
        })
        .collect();

    let results: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("worker finished"))
        .collect();
    assert_eq!(results, [1, 2, 3, 4]);
}

proptest! {
    #[test]
    fn prop_type_table_is_identity_over_tokens(
        tokens in proptest::collection::vec("[A-Z_]{1,12}", 1..12),
        separators in proptest::collection::vec("[ \t\n]{1,3}", 12),
    ) {
        let input = tokens
            .iter()
            .zip(&separators)
            .map(|(token, sep)| format!("{sep}{token}"))
            .collect::<String>();

        let table = create_types(&input).expect("non-empty input");

        let expected: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
        let actual: BTreeSet<&str> = table.names().collect();
        prop_assert_eq!(expected, actual);
        for (name, tag) in table.iter() {
            prop_assert_eq!(name, tag);
        }
    }

    #[test]
    fn prop_unknown_actions_leave_state_alone(state in any::<i64>(), tag in "[A-Z]{1,8}") {
        prop_assume!(tag != "INCREMENT");
        prop_assert_eq!(counter().reduce(Some(state), Some(&Action::new(tag))), state);
    }
}
