//! Reducers, the scope gate, and key-wise composition.
//!
//! ```text
//! Action ──→ ScopedReducer ──(admitted)──→ inner Reducer ──→ State
//!                  │
//!                  └──(not admitted)──→ prior State
//! ```

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::action::Action;
use crate::policy::ScopePolicy;
use crate::scope::Scope;

/// Computes the next state from the prior state and an action.
///
/// `None` is the uninitialised sentinel: the reducer is being asked for its
/// initial value. Implementations must be pure.
pub trait Reducer<S> {
    fn reduce(&self, state: Option<S>, action: &Action) -> S;
}

impl<S, F> Reducer<S> for F
where
    F: Fn(Option<S>, &Action) -> S,
{
    fn reduce(&self, state: Option<S>, action: &Action) -> S {
        self(state, action)
    }
}

/// Gates a reducer so it only sees actions addressed to its scope.
///
/// The inner reducer runs when the prior state is uninitialised (so its
/// initial state can be applied) or when the policy admits the action. Every
/// other action returns the prior state unchanged. Nothing is remembered
/// between calls.
#[derive(Debug, Clone)]
pub struct ScopedReducer<R> {
    inner: R,
    scope: Scope,
    policy: ScopePolicy,
}

impl<R> ScopedReducer<R> {
    pub fn new(inner: R, scope: Scope) -> Self {
        Self::with_policy(inner, scope, ScopePolicy::default())
    }

    pub fn with_policy(inner: R, scope: Scope, policy: ScopePolicy) -> Self {
        Self {
            inner,
            scope,
            policy,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn policy(&self) -> &ScopePolicy {
        &self.policy
    }
}

impl<S, R> Reducer<S> for ScopedReducer<R>
where
    R: Reducer<S>,
{
    fn reduce(&self, state: Option<S>, action: &Action) -> S {
        let Some(prior) = state else {
            return self.inner.reduce(None, &self.policy.unscoped(action));
        };
        match self.policy.admit(action, &self.scope) {
            Some(admitted) => {
                tracing::trace!(scope = %self.scope, action = %action.kind, "scope matched");
                self.inner.reduce(Some(prior), &admitted)
            }
            None => prior,
        }
    }
}

/// Shorthand for [`ScopedReducer::new`].
pub fn scoped_reducer<R>(inner: R, scope: Scope) -> ScopedReducer<R> {
    ScopedReducer::new(inner, scope)
}

/// Composes reducers key by key into one object-valued reducer.
///
/// Each child reducer is called exactly once per action with the prior value
/// under its key (`None` if absent). Keys not registered are dropped from the
/// resulting object.
#[derive(Default)]
pub struct CombinedReducer {
    entries: Vec<(String, Box<dyn Reducer<Value>>)>,
}

impl CombinedReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `reducer` under `key`, replacing any earlier registration.
    pub fn with<R>(mut self, key: impl Into<String>, reducer: R) -> Self
    where
        R: Reducer<Value> + 'static,
    {
        let key = key.into();
        self.entries.retain(|(existing, _)| *existing != key);
        let reducer: Box<dyn Reducer<Value>> = Box::new(reducer);
        self.entries.push((key, reducer));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl Reducer<Value> for CombinedReducer {
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        let mut prior = match state {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        let next = self
            .entries
            .iter()
            .map(|(key, reducer)| (key.clone(), reducer.reduce(prior.remove(key), action)))
            .collect();
        Value::Object(next)
    }
}

impl std::fmt::Debug for CombinedReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Runs a typed reducer against a JSON slice.
///
/// The prior slice is decoded into `S`; a slice that does not decode is
/// treated as uninitialised. The result is encoded back to JSON. If encoding
/// fails the prior slice is kept (`null` when there was none).
pub struct JsonReducer<R, S> {
    inner: R,
    _state: PhantomData<fn() -> S>,
}

impl<R, S> JsonReducer<R, S> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            _state: PhantomData,
        }
    }
}

impl<R, S> Reducer<Value> for JsonReducer<R, S>
where
    R: Reducer<S>,
    S: Serialize + DeserializeOwned,
{
    fn reduce(&self, state: Option<Value>, action: &Action) -> Value {
        let prior = state.as_ref().and_then(|value| match S::deserialize(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("Slice did not decode, reinitialising: {}", e);
                None
            }
        });
        let next = self.inner.reduce(prior, action);
        serde_json::to_value(&next).unwrap_or_else(|e| {
            tracing::warn!("Reduced state did not encode, keeping prior slice: {}", e);
            state.unwrap_or(Value::Null)
        })
    }
}

/// Shorthand for [`JsonReducer::new`].
pub fn json_reducer<R, S>(inner: R) -> JsonReducer<R, S> {
    JsonReducer::new(inner)
}
