//! Scope paths and the state-tree path resolver.
//!
//! A scope is a `/`-separated path such as `"widgets/42"`. It names one
//! independent instance of generic state inside a larger tree and is the key
//! every scoped wrapper in this crate threads through actions, selectors,
//! reducers and dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Separator between scope segments.
pub const SEPARATOR: char = '/';

/// Errors produced when constructing a [`Scope`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("Scope must not be empty")]
    Empty,

    #[error("Scope '{scope}' has an empty segment at position {index}")]
    EmptySegment { scope: String, index: usize },
}

/// A validated, non-empty scope path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Scope(String);

impl Scope {
    /// Validates and wraps a scope path.
    ///
    /// Fails when the path is empty or any of its segments is empty
    /// (`"a//b"`, `"/a"`, `"a/"`).
    pub fn new(path: impl Into<String>) -> Result<Self, ScopeError> {
        let path = path.into();
        if path.is_empty() {
            return Err(ScopeError::Empty);
        }
        if let Some(index) = path.split(SEPARATOR).position(str::is_empty) {
            return Err(ScopeError::EmptySegment { scope: path, index });
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, root to leaf.
    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split(SEPARATOR)
    }

    /// Number of segments in the path.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Returns a new scope with `segment` appended.
    pub fn child(&self, segment: &str) -> Result<Self, ScopeError> {
        Self::new(format!("{}{}{}", self.0, SEPARATOR, segment))
    }

    /// True when `other` is this scope or lies beneath it.
    ///
    /// Comparison is by whole segments, so `"list"` contains `"list/2"` but
    /// not `"list2"`.
    pub fn contains(&self, other: &str) -> bool {
        match other.strip_prefix(self.0.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with(SEPARATOR),
            None => false,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Scope {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Scope {
    type Error = ScopeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Scope {
    type Error = ScopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.0
    }
}

impl PartialEq<str> for Scope {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Scope {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Resolves the slice of `state` addressed by `scope`.
///
/// Each segment is looked up in turn, starting from `state`: object keys by
/// name, array elements by decimal index. A missing key, an out-of-range index
/// or a scalar in the middle of the path yields `None`.
pub fn get_state_slice<'a>(state: &'a Value, scope: &Scope) -> Option<&'a Value> {
    scope
        .segments()
        .try_fold(state, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}
