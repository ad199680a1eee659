//! # Reducer Sauce Testing
//!
//! Testing utilities and helpers for reducer-sauce.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then harness for reducers
//! - Assertion helpers for action records
//! - proptest strategies for names, name lists and action records
//! - A one-line tracing setup for tests
//!
//! ## Example
//!
//! ```
//! use reducer_sauce_core::{Action, HandlerMap, create_reducer};
//! use reducer_sauce_testing::{ReducerTest, init_tracing};
//!
//! init_tracing();
//!
//! let reducer = create_reducer(
//!     Vec::<String>::new(),
//!     HandlerMap::new().on("ADD_TODO", |mut todos: Vec<String>, action: &Action| {
//!         todos.push(action.get("text").and_then(|v| v.as_str()).unwrap_or_default().to_string());
//!         todos
//!     }),
//! );
//!
//! ReducerTest::new(reducer)
//!     .when_action(Action::new("ADD_TODO").with("text", "buy milk"))
//!     .then_state(|todos| assert_eq!(todos, &["buy milk"]))
//!     .run();
//! ```

pub mod reducer_test;

/// Property-based testing utilities
///
/// Strategies producing the inputs the factories accept.
pub mod properties {
    use proptest::prelude::*;
    use reducer_sauce_core::Action;
    use serde_json::Value;

    /// camelCase identifiers such as `addTodo` or `fetchUserById`.
    pub fn camel_case_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,7}([A-Z][a-z0-9]{1,7}){0,3}"
    }

    /// SCREAMING_SNAKE tags such as `ADD_TODO`.
    pub fn type_tag() -> impl Strategy<Value = String> {
        "[A-Z][A-Z0-9]{0,7}(_[A-Z0-9]{1,7}){0,3}"
    }

    /// Whitespace-separated lists of tags with irregular spacing, as
    /// accepted by `create_types`. Returns the raw input and the tags.
    pub fn type_list() -> impl Strategy<Value = (String, Vec<String>)> {
        proptest::collection::vec((type_tag(), "[ \t\r\n]{1,4}"), 1..16).prop_map(|pairs| {
            let input: String = pairs.iter().map(|(tag, sep)| format!("{sep}{tag}")).collect();
            let tags: Vec<String> = pairs.into_iter().map(|(tag, _)| tag).collect();
            (input, tags)
        })
    }

    /// Scalar JSON values usable as action fields.
    pub fn field_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-zA-Z0-9 ]{0,16}".prop_map(Value::from),
        ]
    }

    /// Action records with a tag and up to four fields.
    pub fn action() -> impl Strategy<Value = Action> {
        (
            type_tag(),
            proptest::collection::vec(("[a-z]{1,8}", field_value()), 0..4),
        )
            .prop_map(|(tag, fields)| {
                fields
                    .into_iter()
                    .filter(|(key, _)| key != "type")
                    .fold(Action::new(tag), |action, (key, value)| action.with(key, value))
            })
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honors `RUST_LOG` and defaults to `warn`. Safe to call from every test;
/// only the first call installs anything.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};
