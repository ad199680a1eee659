//! Todo list demo
//!
//! The action set is declared as JSON, the way an application would load it
//! from a config file, and the reducer's handlers are keyed through the type
//! table so no tag is spelled out twice.

use reducer_sauce_core::{
    Action, ActionConfig, ActionType, Actions, DispatchReducer, HandlerMap, Result, create_actions,
    create_reducer,
};
use reducer_sauce_macros::ActionType;
use serde::Serialize;
use serde_json::Value;

/// Action definitions: name → positional fields.
pub const TODO_ACTIONS: &str = r#"{
    "addTodo": ["text"],
    "toggleTodo": ["index"],
    "removeTodo": ["index"],
    "clearCompleted": null
}"#;

/// One entry in the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Todo {
    /// What to do
    pub text: String,
    /// Whether it's done
    pub done: bool,
}

/// Demo state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoState {
    /// Todos in insertion order
    pub todos: Vec<Todo>,
}

/// Typed view of the same actions for code that prefers enums.
#[derive(ActionType, Clone, Debug, Serialize)]
pub enum TodoAction {
    /// Append a todo
    AddTodo {
        /// Text of the new todo
        text: String,
    },
    /// Flip the done flag at an index
    ToggleTodo {
        /// Position in the list
        index: usize,
    },
    /// Remove the todo at an index
    RemoveTodo {
        /// Position in the list
        index: usize,
    },
    /// Drop every done todo
    ClearCompleted,
}

/// Build the type table and creators from [`TODO_ACTIONS`].
///
/// # Errors
///
/// Returns an error if the embedded configuration is invalid.
pub fn todo_actions() -> Result<Actions> {
    create_actions(ActionConfig::from_json_str(TODO_ACTIONS)?)
}

fn index_of(action: &Action) -> Option<usize> {
    action
        .get("index")
        .and_then(Value::as_u64)
        .and_then(|index| usize::try_from(index).ok())
}

/// Build the reducer, keyed by the tags in `actions.types`.
#[must_use]
pub fn todo_reducer(actions: &Actions) -> DispatchReducer<TodoState> {
    let types = &actions.types;

    let handlers = HandlerMap::new()
        .on(&types["addTodo"], |mut state: TodoState, action: &Action| {
            let text = action.get("text").and_then(Value::as_str).unwrap_or_default();
            state.todos.push(Todo {
                text: text.to_string(),
                done: false,
            });
            state
        })
        .on(&types["toggleTodo"], |mut state: TodoState, action: &Action| {
            if let Some(todo) = index_of(action).and_then(|index| state.todos.get_mut(index)) {
                todo.done = !todo.done;
            }
            state
        })
        .on(&types["removeTodo"], |mut state: TodoState, action: &Action| {
            match index_of(action) {
                Some(index) if index < state.todos.len() => {
                    state.todos.remove(index);
                },
                _ => tracing::warn!("removeTodo with out-of-range index ignored"),
            }
            state
        })
        .on(&types["clearCompleted"], |mut state: TodoState, _: &Action| {
            state.todos.retain(|todo| !todo.done);
            state
        });

    create_reducer(TodoState::default(), handlers)
}

/// Names of the typed actions the reducer has no handler for.
#[must_use]
pub fn unhandled_tags(reducer: &DispatchReducer<TodoState>) -> Vec<&'static str> {
    TodoAction::type_tags()
        .iter()
        .copied()
        .filter(|tag| !reducer.handles(tag))
        .collect()
}
