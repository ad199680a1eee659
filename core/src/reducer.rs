//! Reducers that dispatch on an action's type tag.
//!
//! A [`DispatchReducer`] closes over an initial state and a [`HandlerMap`].
//! Calling [`Reducer::reduce`] with `(state, action)`:
//!
//! 1. substitutes the initial state when `state` is `None`,
//! 2. returns the state untouched when `action` is `None`,
//! 3. returns the state untouched when the action has no string `type`,
//! 4. returns the state untouched when no handler is registered for the tag,
//! 5. otherwise returns whatever the handler returns.
//!
//! Malformed or unknown actions are absorbed rather than reported, since a
//! long-lived reducer sees records from many sources.
//!
//! # Example
//!
//! ```
//! use reducer_sauce_core::{Action, HandlerMap, Reducer, create_reducer};
//!
//! let handlers = HandlerMap::new().on("INCREMENT", |count: i64, action: &Action| {
//!     count + action.get("amount").and_then(|v| v.as_i64()).unwrap_or(1)
//! });
//! let reducer = create_reducer(0, handlers);
//!
//! assert_eq!(reducer.reduce(None, None), 0);
//! assert_eq!(reducer.reduce(Some(5), Some(&Action::new("INCREMENT").with("amount", 3))), 8);
//! assert_eq!(reducer.reduce(Some(5), Some(&Action::new("UNKNOWN"))), 5);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::action::Action;
use crate::error::{HANDLERS_REQUIRED, INITIAL_STATE_REQUIRED, Result, SauceError};

/// A state transition for one type tag.
pub type Handler<S> = Arc<dyn Fn(S, &Action) -> S + Send + Sync>;

/// The reducing function abstraction.
///
/// State is threaded through arguments and return values; implementors hold
/// no mutable state of their own.
pub trait Reducer {
    /// The state this reducer produces.
    type State;

    /// Compute the next state. `None` for `state` means "use the initial
    /// state"; `None` for `action` is a no-op.
    ///
    /// Only string `type` values dispatch; a numeric, boolean or null `type`
    /// never reaches a handler, even one registered under `"7"` or `"null"`.
    fn reduce(&self, state: Option<Self::State>, action: Option<&Action>) -> Self::State;
}

/// Type tag → handler lookup.
///
/// Built once at startup and never changed afterwards; the reducer holds it
/// behind an `Arc`, so clones of a reducer share one map.
pub struct HandlerMap<S> {
    handlers: HashMap<String, Handler<S>>,
}

impl<S> HandlerMap<S> {
    /// An empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for `tag` and return the map.
    #[must_use]
    pub fn on<F>(mut self, tag: impl Into<String>, handler: F) -> Self
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        self.insert(tag, handler);
        self
    }

    /// Register `handler` for `tag`, replacing any previous handler.
    pub fn insert<F>(&mut self, tag: impl Into<String>, handler: F)
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        self.handlers.insert(tag.into(), Arc::new(handler));
    }

    /// The handler for `tag`, if any.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&Handler<S>> {
        self.handlers.get(tag)
    }

    /// Whether a handler is registered for `tag`.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Number of handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl<S> Default for HandlerMap<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for HandlerMap<S> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<S> fmt::Debug for HandlerMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("HandlerMap").field("tags", &tags).finish()
    }
}

/// A reducer dispatching on `action.type`.
pub struct DispatchReducer<S> {
    initial_state: S,
    handlers: Arc<HandlerMap<S>>,
}

impl<S: Clone> DispatchReducer<S> {
    /// Start a [`ReducerBuilder`].
    #[must_use]
    pub fn builder() -> ReducerBuilder<S> {
        ReducerBuilder::new()
    }

    /// The state used when `reduce` is called without one.
    #[must_use]
    pub const fn initial_state(&self) -> &S {
        &self.initial_state
    }

    /// Whether a handler is registered for `tag`.
    #[must_use]
    pub fn handles(&self, tag: &str) -> bool {
        self.handlers.contains(tag)
    }

    /// Reduce a concrete state and action.
    #[must_use]
    pub fn dispatch(&self, state: S, action: &Action) -> S {
        self.reduce(Some(state), Some(action))
    }
}

impl<S: Clone> Reducer for DispatchReducer<S> {
    type State = S;

    fn reduce(&self, state: Option<S>, action: Option<&Action>) -> S {
        let state = state.unwrap_or_else(|| self.initial_state.clone());

        let Some(action) = action else {
            tracing::trace!("No action, returning state");
            return state;
        };

        let Some(tag) = action.type_tag() else {
            tracing::trace!("Action has no type tag, returning state");
            return state;
        };

        let Some(handler) = self.handlers.get(tag) else {
            tracing::trace!(tag, "No handler for action, returning state");
            return state;
        };

        tracing::trace!(tag, "Dispatching action");
        handler(state, action)
    }
}

impl<S: Clone> Clone for DispatchReducer<S> {
    fn clone(&self) -> Self {
        Self {
            initial_state: self.initial_state.clone(),
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for DispatchReducer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchReducer")
            .field("initial_state", &self.initial_state)
            .field("handlers", &self.handlers)
            .finish()
    }
}

/// Fluent construction of a [`DispatchReducer`] with the required-argument
/// checks applied at [`build`](ReducerBuilder::build) time.
pub struct ReducerBuilder<S> {
    initial_state: Option<S>,
    handlers: Option<HandlerMap<S>>,
}

impl<S: Clone> ReducerBuilder<S> {
    /// A builder with neither initial state nor handlers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_state: None,
            handlers: None,
        }
    }

    /// Set the initial state.
    #[must_use]
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Use `handlers` as the handler map, replacing any registered so far.
    #[must_use]
    pub fn handlers(mut self, handlers: HandlerMap<S>) -> Self {
        self.handlers = Some(handlers);
        self
    }

    /// Register a single handler.
    #[must_use]
    pub fn on<F>(mut self, tag: impl Into<String>, handler: F) -> Self
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        self.handlers
            .get_or_insert_with(HandlerMap::new)
            .insert(tag, handler);
        self
    }

    /// Build the reducer.
    ///
    /// # Errors
    ///
    /// Returns [`SauceError::InvalidArgument`] if no initial state was given,
    /// or if neither a handler map nor a single handler was given. An empty
    /// handler map is accepted.
    pub fn build(self) -> Result<DispatchReducer<S>> {
        let initial_state = self
            .initial_state
            .ok_or_else(|| SauceError::invalid_argument(INITIAL_STATE_REQUIRED))?;
        let handlers = self
            .handlers
            .ok_or_else(|| SauceError::invalid_argument(HANDLERS_REQUIRED))?;

        Ok(create_reducer(initial_state, handlers))
    }
}

impl<S: Clone> Default for ReducerBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a reducer from an initial state and a handler map.
#[must_use]
pub fn create_reducer<S: Clone>(initial_state: S, handlers: HandlerMap<S>) -> DispatchReducer<S> {
    tracing::debug!(handlers = handlers.len(), "Created reducer");
    DispatchReducer {
        initial_state,
        handlers: Arc::new(handlers),
    }
}
