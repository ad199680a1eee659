//! Action creators derived from a declarative configuration.
//!
//! An [`ActionConfig`] lists, in order, one entry per action. Each entry is
//! either a list of field names (an auto-generated creator zips positional
//! arguments onto those names) or a custom creator function used verbatim.
//! [`create_actions`] turns the configuration into a [`TypeTable`] keyed by
//! entry name and a [`Creators`] set:
//!
//! ```
//! use reducer_sauce_core::{create_actions, Action, ActionConfig};
//! use serde_json::json;
//!
//! let config = ActionConfig::new()
//!     .fields("addTodo", ["text"])
//!     .fields("reset", [] as [&str; 0]);
//!
//! let actions = create_actions(config)?;
//! assert_eq!(actions.types.get("addTodo"), Some("ADD_TODO"));
//!
//! let action = actions.creators.create("addTodo", &[json!("buy milk")]);
//! assert_eq!(action, Some(Action::new("ADD_TODO").with("text", "buy milk")));
//! # Ok::<(), reducer_sauce_core::SauceError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::action::Action;
use crate::error::{CONFIG_EMPTY, CONFIG_REQUIRED, Result, SauceError};
use crate::naming::to_tag;
use crate::types::{TypeTable, create_types};

/// Signature of a user supplied creator.
pub type CustomCreator = Arc<dyn Fn(&[Value]) -> Action + Send + Sync>;

/// How a single configuration entry produces actions.
#[derive(Clone)]
pub enum CreatorSpec {
    /// Generate a creator that zips positional arguments onto these names.
    Fields(Vec<String>),
    /// Use this function as the creator, untouched.
    Custom(CustomCreator),
}

impl fmt::Debug for CreatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(names) => f.debug_tuple("CreatorSpec::Fields").field(names).finish(),
            Self::Custom(_) => write!(f, "CreatorSpec::Custom(<fn>)"),
        }
    }
}

/// Ordered set of action definitions.
#[derive(Clone, Debug, Default)]
pub struct ActionConfig {
    entries: IndexMap<String, CreatorSpec>,
}

impl ActionConfig {
    /// An empty configuration. [`create_actions`] rejects it until at least
    /// one entry is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an action whose creator takes the given fields positionally.
    #[must_use]
    pub fn fields<I, S>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = fields.into_iter().map(Into::into).collect();
        self.entries.insert(name.into(), CreatorSpec::Fields(fields));
        self
    }

    /// Declare an action with a hand-written creator.
    #[must_use]
    pub fn custom<F>(mut self, name: impl Into<String>, creator: F) -> Self
    where
        F: Fn(&[Value]) -> Action + Send + Sync + 'static,
    {
        self.entries
            .insert(name.into(), CreatorSpec::Custom(Arc::new(creator)));
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// The value must be an object whose members are `null` (no fields) or
    /// arrays of field names. Custom creators cannot be expressed in JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SauceError::InvalidArgument`] for `null`, non-object values,
    /// or members that are not `null` or a list of strings.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(SauceError::invalid_argument(CONFIG_REQUIRED));
        }

        Self::deserialize(value).map_err(|err| SauceError::invalid_argument(err.to_string()))
    }

    /// Parse a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SauceError::InvalidArgument`] if the text is not valid JSON or
    /// fails [`ActionConfig::from_value`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| SauceError::invalid_argument(err.to_string()))?;
        Self::from_value(&value)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for ActionConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Option<Vec<String>>>::deserialize(deserializer)?;
        let entries = raw
            .into_iter()
            .map(|(name, fields)| (name, CreatorSpec::Fields(fields.unwrap_or_default())))
            .collect();
        Ok(Self { entries })
    }
}

/// A callable that produces [`Action`] records.
#[derive(Clone)]
pub enum ActionCreator {
    /// Generated from a field list.
    Generated {
        /// Tag stamped on every record.
        tag: String,
        /// Field names matched positionally against arguments.
        fields: Vec<String>,
    },
    /// Supplied by the caller.
    Custom(CustomCreator),
}

impl ActionCreator {
    /// Generated creator for `name`, tagged with `to_tag(name)`.
    #[must_use]
    pub fn generated(name: &str, fields: Vec<String>) -> Self {
        Self::Generated {
            tag: to_tag(name),
            fields,
        }
    }

    /// Produce an action from positional arguments.
    ///
    /// Generated creators pair the n-th field with the n-th argument. Extra
    /// arguments are ignored and missing ones leave their fields out. The tag
    /// is written first, so a field named `type` replaces it.
    #[must_use]
    pub fn create(&self, args: &[Value]) -> Action {
        match self {
            Self::Generated { tag, fields } => fields
                .iter()
                .zip(args)
                .fold(Action::new(tag.as_str()), |action, (field, arg)| {
                    action.with(field.as_str(), arg.clone())
                }),
            Self::Custom(creator) => creator(args),
        }
    }

    /// The tag a generated creator stamps; `None` for custom creators.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Generated { tag, .. } => Some(tag.as_str()),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Debug for ActionCreator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated { tag, fields } => f
                .debug_struct("ActionCreator::Generated")
                .field("tag", tag)
                .field("fields", fields)
                .finish(),
            Self::Custom(_) => write!(f, "ActionCreator::Custom(<fn>)"),
        }
    }
}

/// Creators indexed by configuration name.
#[derive(Clone, Debug, Default)]
pub struct Creators {
    creators: IndexMap<String, ActionCreator>,
}

impl Creators {
    /// Look up the creator registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ActionCreator> {
        self.creators.get(name)
    }

    /// Invoke the creator registered under `name`, if any.
    #[must_use]
    pub fn create(&self, name: &str, args: &[Value]) -> Option<Action> {
        self.get(name).map(|creator| creator.create(args))
    }

    /// Number of creators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creators.len()
    }

    /// Whether there are no creators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    /// Creator names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }
}

/// Output of [`create_actions`].
#[derive(Clone, Debug)]
pub struct Actions {
    /// Configuration name → derived tag.
    pub types: TypeTable,
    /// Configuration name → creator.
    pub creators: Creators,
}

/// Build a type table and creators from a configuration.
///
/// # Errors
///
/// Returns [`SauceError::InvalidArgument`] when the configuration has no
/// entries.
pub fn create_actions(config: ActionConfig) -> Result<Actions> {
    if config.is_empty() {
        return Err(SauceError::invalid_argument(CONFIG_EMPTY));
    }

    let types = convert_to_types(&config)?;

    let creators = config
        .entries
        .into_iter()
        .map(|(name, spec)| {
            let creator = match spec {
                CreatorSpec::Custom(creator) => ActionCreator::Custom(creator),
                CreatorSpec::Fields(fields) => ActionCreator::generated(&name, fields),
            };
            (name, creator)
        })
        .collect();
    let creators = Creators { creators };

    tracing::debug!(
        types = types.len(),
        creators = creators.len(),
        "Created action types and creators"
    );

    Ok(Actions { types, creators })
}

/// Derive the name → tag table, validating the joined tags the same way
/// [`create_types`] validates hand-written lists.
fn convert_to_types(config: &ActionConfig) -> Result<TypeTable> {
    let joined = config.names().map(to_tag).collect::<Vec<_>>().join(" ");
    let tags = create_types(&joined)?;

    Ok(config
        .names()
        .map(|name| (name.to_string(), to_tag(name)))
        .filter(|(_, tag)| tags.contains(tag))
        .collect())
}
