//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use reducer_sauce_core::{Action, reducer::Reducer};

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// Leaving out `given_state` exercises the reducer's initial state, and
/// leaving out `when_action` exercises the "no action" path.
///
/// # Example
///
/// ```
/// use reducer_sauce_core::{Action, HandlerMap, create_reducer};
/// use reducer_sauce_testing::ReducerTest;
///
/// let reducer = create_reducer(0_i64, HandlerMap::new().on("INCREMENT", |n: i64, _: &Action| n + 1));
///
/// ReducerTest::new(reducer)
///     .given_state(41)
///     .when_action(Action::new("INCREMENT"))
///     .then_state(|state| assert_eq!(*state, 42))
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    initial_state: Option<R::State>,
    actions: Vec<Action>,
    state_assertions: Vec<StateAssertion<R::State>>,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
        }
    }

    /// Set the starting state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to dispatch (When)
    ///
    /// Actions are dispatched in the order they were added.
    #[must_use]
    pub fn when_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if any assertion fails.
    pub fn run(self) {
        let mut actions = self.actions.iter();
        let first = self.reducer.reduce(self.initial_state, actions.next());
        let state = actions.fold(first, |state, action| {
            self.reducer.reduce(Some(state), Some(action))
        });

        for assertion in self.state_assertions {
            assertion(&state);
        }
    }
}

/// Helper assertions for action records
pub mod assertions {
    use reducer_sauce_core::Action;
    use serde_json::Value;

    /// Assert that an action carries the expected type tag
    ///
    /// # Panics
    ///
    /// Panics if the tag is missing or different.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_action_type(action: &Action, expected: &str) {
        assert_eq!(
            action.type_tag(),
            Some(expected),
            "Expected action type {expected}, found {:?}",
            action.get("type")
        );
    }

    /// Assert that an action has exactly the given JSON shape
    ///
    /// # Panics
    ///
    /// Panics if the serialized record differs from `expected`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_action_eq(action: &Action, expected: &Value) {
        let actual = Value::from(action.clone());
        assert_eq!(&actual, expected, "Action record mismatch");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reducer_sauce_core::{HandlerMap, create_reducer};
    use serde_json::json;

    fn counter() -> reducer_sauce_core::DispatchReducer<i32> {
        create_reducer(
            0,
            HandlerMap::new()
                .on("INCREMENT", |count: i32, _: &Action| count + 1)
                .on("DECREMENT", |count: i32, _: &Action| count - 1),
        )
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(counter())
            .given_state(0)
            .when_action(Action::new("INCREMENT"))
            .then_state(|state| {
                assert_eq!(*state, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_sequence() {
        ReducerTest::new(counter())
            .given_state(5)
            .when_action(Action::new("DECREMENT"))
            .when_action(Action::new("DECREMENT"))
            .when_action(Action::new("UNKNOWN"))
            .then_state(|state| {
                assert_eq!(*state, 3);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_initial_state() {
        ReducerTest::new(counter())
            .then_state(|state| {
                assert_eq!(*state, 0);
            })
            .run();
    }

    #[test]
    fn test_assertions() {
        let action = Action::new("ADD_TODO").with("text", "milk");
        assertions::assert_action_type(&action, "ADD_TODO");
        assertions::assert_action_eq(&action, &json!({ "type": "ADD_TODO", "text": "milk" }));
    }
}
