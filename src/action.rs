//! Action records and action scoping.
//!
//! Actions follow the flux-standard-action shape:
//!
//! ```text
//! { "type": "SET_VALUE", "payload": ..., "error": true, "meta": { "scope": "a/b", ... } }
//! ```
//!
//! Scoping never replaces an action; it merges the scope into `meta` (or into
//! the type string, depending on the [`ScopePolicy`]) and leaves every other
//! field alone.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::policy::ScopePolicy;
use crate::scope::Scope;

/// Key under `meta` that carries the scope.
pub const SCOPE_KEY: &str = "scope";

/// Action metadata: an open record of string keys.
pub type Meta = Map<String, Value>;

/// A dispatched description of an intended state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Action {
    /// Discriminator, `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    /// `Some(Value::Null)` for an explicit `"payload": null`, `None` when absent.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub payload: Option<Value>,
    /// `None` when the `error` key is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    /// `"meta": null` reads as an empty record.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Map::is_empty"
    )]
    pub meta: Meta,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Meta, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Meta>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Action {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
            error: None,
            meta: Meta::new(),
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Marks the action as an error; `payload` then carries the error value.
    pub fn with_error(mut self, error: bool) -> Self {
        self.error = Some(error);
        self
    }

    /// True only when the `error` flag is present and set.
    pub fn is_error(&self) -> bool {
        self.error == Some(true)
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// The `meta.scope` tag, if present and a string.
    pub fn scope(&self) -> Option<&str> {
        self.meta.get(SCOPE_KEY).and_then(Value::as_str)
    }

    /// Shallow-merges `other` into `meta`.
    ///
    /// Keys in `other` win on collision; keys only present on the action are
    /// kept.
    pub fn merge_meta(mut self, other: Meta) -> Self {
        self.meta.extend(other);
        self
    }

    /// Sets `meta.scope`, replacing any previous scope and keeping every other
    /// `meta` key.
    pub fn with_scope(self, scope: &Scope) -> Self {
        let mut tag = Meta::new();
        tag.insert(SCOPE_KEY.to_string(), Value::String(scope.to_string()));
        self.merge_meta(tag)
    }

    /// Removes `meta.scope`.
    pub fn without_scope(mut self) -> Self {
        self.meta.remove(SCOPE_KEY);
        self
    }

    /// Converts the action into its wire representation.
    pub fn into_value(self) -> Value {
        let mut record = Map::new();
        record.insert("type".to_string(), Value::String(self.kind));
        if let Some(payload) = self.payload {
            record.insert("payload".to_string(), payload);
        }
        if let Some(error) = self.error {
            record.insert("error".to_string(), Value::Bool(error));
        }
        if !self.meta.is_empty() {
            record.insert("meta".to_string(), Value::Object(self.meta));
        }
        Value::Object(record)
    }
}

impl From<Action> for Value {
    fn from(action: Action) -> Self {
        action.into_value()
    }
}

/// Result of classifying a dynamic value against the action contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// An object with a string `type` and no keys outside
    /// `type`/`payload`/`error`/`meta`.
    Action(Action),
    /// Anything else: strings, numbers, arrays, arbitrary records.
    Opaque(Value),
}

impl Classified {
    pub fn classify(value: Value) -> Self {
        let conforms = value
            .as_object()
            .and_then(|record| record.get("type"))
            .is_some_and(Value::is_string);
        if !conforms {
            return Self::Opaque(value);
        }
        match Action::deserialize(&value) {
            Ok(action) => Self::Action(action),
            Err(_) => Self::Opaque(value),
        }
    }
}

/// Something that may yield an action: the three shapes a scoping wrapper
/// accepts.
pub enum ActionSource {
    /// A zero-argument creator, invoked once per call of the scoped producer.
    Producer(Box<dyn Fn() -> Value>),
    Action(Action),
    /// A value that does not conform to the action contract. Never scoped.
    Opaque(Value),
}

impl ActionSource {
    /// Classifies a plain value. Values are never producers.
    pub fn from_value(value: Value) -> Self {
        match Classified::classify(value) {
            Classified::Action(action) => Self::Action(action),
            Classified::Opaque(value) => Self::Opaque(value),
        }
    }

    pub fn producer<F>(producer: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        Self::Producer(Box::new(producer))
    }

    /// Applies `scope` according to `policy`.
    ///
    /// Producers are wrapped so that each invocation calls the inner producer
    /// exactly once and scopes its output if that output is an action. Opaque
    /// values are returned untouched.
    pub fn scoped(self, scope: &Scope, policy: &ScopePolicy) -> Self {
        match self {
            Self::Action(action) => Self::Action(policy.apply(action, scope)),
            Self::Opaque(value) => Self::Opaque(value),
            Self::Producer(inner) => {
                let scope = scope.clone();
                let policy = policy.clone();
                Self::Producer(Box::new(move || match Classified::classify(inner()) {
                    Classified::Action(action) => policy.apply(action, &scope).into_value(),
                    Classified::Opaque(value) => value,
                }))
            }
        }
    }

    /// Resolves the source to a value, invoking a producer once.
    pub fn produce(&self) -> Value {
        match self {
            Self::Producer(producer) => producer(),
            Self::Action(action) => action.clone().into_value(),
            Self::Opaque(value) => value.clone(),
        }
    }
}

impl fmt::Debug for ActionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Producer(_) => f.write_str("Producer(..)"),
            Self::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Self::Opaque(value) => f.debug_tuple("Opaque").field(value).finish(),
        }
    }
}

/// Wraps an action creator so every action it produces carries `scope` in
/// `meta.scope`.
///
/// The creator's argument is forwarded unchanged; use a tuple for creators
/// taking several arguments and `()` for none. The inner creator runs exactly
/// once per call.
pub fn scoped_action<A, F>(creator: F, scope: Scope) -> impl Fn(A) -> Action
where
    F: Fn(A) -> Action,
{
    scoped_action_with(creator, scope, ScopePolicy::default())
}

/// Like [`scoped_action`], with an explicit encoding policy.
pub fn scoped_action_with<A, F>(creator: F, scope: Scope, policy: ScopePolicy) -> impl Fn(A) -> Action
where
    F: Fn(A) -> Action,
{
    move |args| policy.apply(creator(args), &scope)
}
