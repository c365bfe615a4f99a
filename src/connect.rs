//! Mapping functions for a view-binding layer.
//!
//! A binding layer derives component props from two functions: one reading
//! state, one wiring dispatch. These helpers scope both so a generic
//! component can be mounted once per scope.

use serde_json::{Map, Value};

use crate::dispatch::ScopedDispatch;
use crate::policy::ScopePolicy;
use crate::scope::{get_state_slice, Scope};
use crate::selector::scoped_selector;

/// Scopes a state-to-props function. Same contract as
/// [`scoped_selector`](crate::selector::scoped_selector).
pub fn map_state_to_scope<P, R, F>(map_state: F, scope: Scope) -> impl Fn(&Value, P) -> R
where
    F: Fn(Option<&Value>, P) -> R,
{
    scoped_selector(map_state, scope)
}

/// A slice selector registered under a prop name.
pub type KeyedSelector = (String, Box<dyn Fn(Option<&Value>) -> Value>);

/// Scopes a record of selectors keyed by prop name.
///
/// Every selector reads the slice under `scope`; the results are collected
/// into an object keyed the same way. A later duplicate key overwrites an
/// earlier one.
pub fn map_state_to_scope_keyed(
    selectors: Vec<KeyedSelector>,
    scope: Scope,
) -> impl Fn(&Value) -> Value {
    move |state| {
        let slice = get_state_slice(state, &scope);
        let props: Map<String, Value> = selectors
            .iter()
            .map(|(key, selector)| (key.clone(), selector(slice)))
            .collect();
        Value::Object(props)
    }
}

/// Scopes a dispatch-to-props function: it receives a dispatch that tags
/// every action with `scope`.
pub fn map_dispatch_to_scope<D, P, R, F>(map_dispatch: F, scope: Scope) -> impl Fn(D, P) -> R
where
    F: Fn(ScopedDispatch<D>, P) -> R,
{
    map_dispatch_to_scope_with(map_dispatch, scope, ScopePolicy::default())
}

pub fn map_dispatch_to_scope_with<D, P, R, F>(
    map_dispatch: F,
    scope: Scope,
    policy: ScopePolicy,
) -> impl Fn(D, P) -> R
where
    F: Fn(ScopedDispatch<D>, P) -> R,
{
    move |dispatch, props| {
        map_dispatch(
            ScopedDispatch::with_policy(dispatch, scope.clone(), policy.clone()),
            props,
        )
    }
}

/// Binds both mapping functions to one scope.
#[derive(Debug, Clone)]
pub struct ScopedConnect {
    scope: Scope,
    policy: ScopePolicy,
}

impl ScopedConnect {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            policy: ScopePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScopePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn bind<MS, MD>(&self, map_state: MS, map_dispatch: MD) -> Connection<MS, MD> {
        Connection {
            map_state,
            map_dispatch,
            scope: self.scope.clone(),
            policy: self.policy.clone(),
        }
    }
}

/// Shorthand for [`ScopedConnect::new`].
pub fn scoped_connect(scope: Scope) -> ScopedConnect {
    ScopedConnect::new(scope)
}

/// A pair of mapping functions bound to a scope.
#[derive(Debug, Clone)]
pub struct Connection<MS, MD> {
    map_state: MS,
    map_dispatch: MD,
    scope: Scope,
    policy: ScopePolicy,
}

impl<MS, MD> Connection<MS, MD> {
    /// Props derived from the slice under the bound scope.
    pub fn state_props<P, R>(&self, state: &Value, props: P) -> R
    where
        MS: Fn(Option<&Value>, P) -> R,
    {
        (self.map_state)(get_state_slice(state, &self.scope), props)
    }

    /// Props wired to a dispatch that scopes every action.
    pub fn dispatch_props<D, P, R>(&self, dispatch: D, props: P) -> R
    where
        MD: Fn(ScopedDispatch<D>, P) -> R,
    {
        (self.map_dispatch)(
            ScopedDispatch::with_policy(dispatch, self.scope.clone(), self.policy.clone()),
            props,
        )
    }
}
