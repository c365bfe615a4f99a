//! Selectors over a lifecycle slice of the JSON state tree.
//!
//! Compose with [`scoped_selector`](crate::selector::scoped_selector) to read
//! the lifecycle mounted under a scope.

use serde_json::Value;

/// `isLoading`, `false` when the slice is missing.
pub fn get_loading(slice: Option<&Value>) -> bool {
    slice
        .and_then(|s| s.get("isLoading"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Data stored by the last success. `None` for a missing slice or `null`.
pub fn get_data(slice: Option<&Value>) -> Option<&Value> {
    slice.and_then(|s| s.get("data")).filter(|v| !v.is_null())
}

pub fn get_error(slice: Option<&Value>) -> Option<&Value> {
    slice.and_then(|s| s.get("error")).filter(|v| !v.is_null())
}
