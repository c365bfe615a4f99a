//! Scoped actions, selectors, reducers and dispatch for Redux-style state.
//!
//! Many instances of the same generic reducer and selector logic can live in
//! one state tree when each instance is addressed by a [`Scope`], a
//! `/`-separated path such as `"widgets/42"`:
//!
//! ```text
//! creator ──scoped_action──→ Action{meta.scope} ──dispatch──→ every reducer
//!                                                             │
//!                    ScopedReducer("widgets/42") ◄─ admits ───┤
//!                    ScopedReducer("widgets/7")  ◄─ ignores ──┘
//! ```
//!
//! - [`scope`]: scope paths and the state-tree path resolver
//! - [`action`]: the action record and action scoping
//! - [`policy`]: how a scope is encoded on an action and matched by a gate
//! - [`selector`], [`reducer`], [`dispatch`]: the scoped wrappers
//! - [`connect`]: mapping functions for a view-binding layer
//! - [`api`]: the request/success/failure/reset lifecycle reducer
//! - [`config`]: TOML configuration for the policy and the lifecycle reducer

pub mod action;
pub mod api;
pub mod config;
pub mod connect;
pub mod dispatch;
pub mod policy;
pub mod reducer;
pub mod scope;
pub mod selector;

pub use action::{scoped_action, scoped_action_with, Action, ActionSource, Classified, Meta};
pub use connect::{
    map_dispatch_to_scope, map_dispatch_to_scope_with, map_state_to_scope,
    map_state_to_scope_keyed, scoped_connect, KeyedSelector, ScopedConnect,
};
pub use dispatch::{scoped_dispatch, Dispatch, Dispatchable, ScopedDispatch};
pub use policy::ScopePolicy;
pub use reducer::{json_reducer, scoped_reducer, CombinedReducer, JsonReducer, Reducer, ScopedReducer};
pub use scope::{get_state_slice, Scope, ScopeError};
pub use selector::scoped_selector;
