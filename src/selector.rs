//! Scoped selectors.

use serde_json::Value;

use crate::scope::{get_state_slice, Scope};

/// Restricts a slice selector to the part of the tree named by `scope`.
///
/// The returned selector takes the full state, resolves the slice and always
/// calls `selector` with it. A missing branch reaches the selector as `None`;
/// what happens then is up to the selector.
pub fn scoped_selector<P, R, F>(selector: F, scope: Scope) -> impl Fn(&Value, P) -> R
where
    F: Fn(Option<&Value>, P) -> R,
{
    move |state, props| selector(get_state_slice(state, &scope), props)
}
