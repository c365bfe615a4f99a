//! Scoped dispatch.

use serde_json::Value;

use crate::action::{Action, Classified};
use crate::policy::ScopePolicy;
use crate::scope::Scope;

/// What a dispatch function accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatchable {
    Action(Action),
    /// A non-action payload. Forwarded as is, never scoped.
    Opaque(Value),
}

impl Dispatchable {
    pub fn as_action(&self) -> Option<&Action> {
        match self {
            Self::Action(action) => Some(action),
            Self::Opaque(_) => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Action(action) => action.into_value(),
            Self::Opaque(value) => value,
        }
    }
}

impl From<Action> for Dispatchable {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Value> for Dispatchable {
    fn from(value: Value) -> Self {
        match Classified::classify(value) {
            Classified::Action(action) => Self::Action(action),
            Classified::Opaque(value) => Self::Opaque(value),
        }
    }
}

/// A dispatch function as exposed by a state container.
pub trait Dispatch {
    type Output;

    fn dispatch(&mut self, input: Dispatchable) -> Self::Output;
}

impl<F, O> Dispatch for F
where
    F: FnMut(Dispatchable) -> O,
{
    type Output = O;

    fn dispatch(&mut self, input: Dispatchable) -> O {
        self(input)
    }
}

/// Tags every action passing through with a fixed scope.
#[derive(Debug, Clone)]
pub struct ScopedDispatch<D> {
    inner: D,
    scope: Scope,
    policy: ScopePolicy,
}

impl<D> ScopedDispatch<D> {
    pub fn new(inner: D, scope: Scope) -> Self {
        Self::with_policy(inner, scope, ScopePolicy::default())
    }

    pub fn with_policy(inner: D, scope: Scope, policy: ScopePolicy) -> Self {
        Self {
            inner,
            scope,
            policy,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: Dispatch> ScopedDispatch<D> {
    /// Scopes and forwards a typed action.
    pub fn dispatch_action(&mut self, action: Action) -> D::Output {
        self.dispatch(Dispatchable::Action(action))
    }
}

impl<D: Dispatch> Dispatch for ScopedDispatch<D> {
    type Output = D::Output;

    /// Forwards `input` to the wrapped dispatch exactly once.
    fn dispatch(&mut self, input: Dispatchable) -> D::Output {
        let forwarded = match input {
            Dispatchable::Action(action) => {
                Dispatchable::Action(self.policy.apply(action, &self.scope))
            }
            Dispatchable::Opaque(value) => {
                tracing::trace!(scope = %self.scope, "forwarding non-action unscoped");
                Dispatchable::Opaque(value)
            }
        };
        self.inner.dispatch(forwarded)
    }
}

/// Shorthand for [`ScopedDispatch::new`].
pub fn scoped_dispatch<D>(inner: D, scope: Scope) -> ScopedDispatch<D> {
    ScopedDispatch::new(inner, scope)
}
