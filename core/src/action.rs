//! Action records.
//!
//! An [`Action`] is a plain data snapshot: a `type` tag plus any number of
//! named fields, (de)serialized as the flat JSON object `{"type": ..., ...}`.
//! Records built by creators always carry a tag. Records arriving from outside
//! (deserialized from a queue, a socket, a log) may not, and the reducer treats
//! such records as no-ops instead of errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the attribute holding an action's type tag.
pub const TYPE_KEY: &str = "type";

/// A tagged data record describing an intended state transition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action {
    fields: Map<String, Value>,
}

impl Action {
    /// Create a record holding only a type tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(TYPE_KEY.to_string(), Value::String(tag.into()));
        Self { fields }
    }

    /// Wrap an arbitrary field map. The map may or may not contain a `type`.
    #[must_use]
    pub const fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Convert a serializable typed action into a record.
    ///
    /// Expects serde's default (externally tagged) enum representation.
    /// Unit variants become `{"type": TAG}`. Payloads that serialize to an
    /// object, meaning struct variants and newtypes wrapping a struct, have
    /// their fields merged next to `type`. Any other payload (newtypes over
    /// scalars or sequences, tuple variants) lands under a `payload` field.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if the action cannot be serialized, or if
    /// it serializes to anything other than a string or a single-member
    /// object, as internally tagged, adjacently tagged and untagged enums do.
    pub fn from_typed<T>(action: &T) -> serde_json::Result<Self>
    where
        T: ActionType + Serialize,
    {
        let mut record = Self::new(action.type_tag());

        match serde_json::to_value(action)? {
            Value::String(_) => {},
            Value::Object(outer) if outer.len() == 1 => {
                for (_, payload) in outer {
                    match payload {
                        Value::Object(fields) => record.fields.extend(fields),
                        other => {
                            record.fields.insert("payload".to_string(), other);
                        },
                    }
                }
            },
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "expected an externally tagged enum for action {}, got {other}",
                    action.type_tag()
                )));
            },
        }

        Ok(record)
    }

    /// Set a field and return the record, for fluent construction.
    ///
    /// Setting `type` replaces the tag.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// The type tag, if the record has a string `type` attribute.
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.fields.get(TYPE_KEY).and_then(Value::as_str)
    }

    /// Whether the record has a `type` attribute at all.
    #[must_use]
    pub fn has_type(&self) -> bool {
        self.fields.contains_key(TYPE_KEY)
    }

    /// Read a field by name (`type` included).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields in insertion order.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the record, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Action> for Value {
    fn from(action: Action) -> Self {
        Self::Object(action.fields)
    }
}

/// Typed actions that know their own type tag.
///
/// Usually derived with `#[derive(ActionType)]` from the macros crate, which
/// applies [`to_tag`](crate::naming::to_tag) to each variant name.
pub trait ActionType {
    /// Tag for this particular value.
    fn type_tag(&self) -> &'static str;

    /// Every tag this type can produce, in declaration order.
    fn type_tags() -> &'static [&'static str];
}
