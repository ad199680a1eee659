//! # Reducer Sauce Core
//!
//! Boilerplate generators for unidirectional state updates.
//!
//! This crate provides three independent factories, each built once at
//! application start and then treated as an immutable constant:
//!
//! - **[`create_types`]**: whitespace-separated names → identity [`TypeTable`]
//! - **[`create_actions`]**: an [`ActionConfig`] → a [`TypeTable`] keyed by
//!   config name plus [`Creators`] producing [`Action`] records
//! - **[`create_reducer`]**: initial state + [`HandlerMap`] → a
//!   [`DispatchReducer`] computing `(state, action) → state`
//!
//! Tags are derived from names by [`naming::to_tag`] (`addTodo` → `ADD_TODO`).
//!
//! ## Example
//!
//! ```
//! use reducer_sauce_core::*;
//! use serde_json::{Value, json};
//!
//! let Actions { types, creators } = create_actions(
//!     ActionConfig::new()
//!         .fields("addTodo", ["text"])
//!         .fields("clearTodos", [] as [&str; 0]),
//! )?;
//!
//! let handlers = HandlerMap::new()
//!     .on(&types["addTodo"], |mut todos: Vec<String>, action: &Action| {
//!         if let Some(text) = action.get("text").and_then(Value::as_str) {
//!             todos.push(text.to_string());
//!         }
//!         todos
//!     })
//!     .on(&types["clearTodos"], |_: Vec<String>, _: &Action| Vec::new());
//!
//! let reducer = create_reducer(Vec::new(), handlers);
//!
//! let add = creators.create("addTodo", &[json!("buy milk")]);
//! let todos = reducer.reduce(None, add.as_ref());
//! assert_eq!(todos, ["buy milk"]);
//! # Ok::<(), SauceError>(())
//! ```
//!
//! ## Thread safety
//!
//! Tables, creators and reducers are never mutated after construction and are
//! `Send + Sync` when the state type is. Keeping them immutable after setup is
//! the caller's job; nothing here locks.

pub mod action;
pub mod creators;
pub mod error;
pub mod naming;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use action::{Action, ActionType, TYPE_KEY};
pub use creators::{
    ActionConfig, ActionCreator, Actions, CreatorSpec, Creators, CustomCreator, create_actions,
};
pub use error::{Result, SauceError};
pub use reducer::{
    DispatchReducer, Handler, HandlerMap, Reducer, ReducerBuilder, create_reducer,
};
pub use types::{TypeTable, create_types};
