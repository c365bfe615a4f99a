//! How a scope is written onto an action and how a gate decides a match.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::scope::Scope;

/// Separator used by [`ScopePolicy::TypeSuffix`] unless configured otherwise.
pub const DEFAULT_TYPE_SEPARATOR: char = '@';

/// Scope encoding and match rule shared by every wrapper in a system.
///
/// The `meta.scope` policies and the type-suffix policy are different wire
/// formats. Actions scoped under one are not recognised by gates using the
/// other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ScopePolicy {
    /// `meta.scope` must equal the bound scope.
    #[default]
    Exact,
    /// `meta.scope` must be the bound scope or one of its descendants.
    Hierarchical,
    /// The scope is appended to the type: `"SET_VALUE@widgets/1"`.
    TypeSuffix {
        #[serde(default = "default_separator")]
        separator: char,
    },
}

fn default_separator() -> char {
    DEFAULT_TYPE_SEPARATOR
}

impl ScopePolicy {
    pub fn type_suffix() -> Self {
        Self::TypeSuffix {
            separator: DEFAULT_TYPE_SEPARATOR,
        }
    }

    /// Tags `action` with `scope`.
    ///
    /// Re-applying the same scope is a no-op; applying a different scope
    /// replaces the previous one.
    pub fn apply(&self, action: Action, scope: &Scope) -> Action {
        match self {
            Self::Exact | Self::Hierarchical => action.with_scope(scope),
            Self::TypeSuffix { separator } => {
                let base = base_type(&action.kind, *separator).to_string();
                Action {
                    kind: format!("{base}{separator}{scope}"),
                    ..action
                }
            }
        }
    }

    /// The scope carried by `action` under this encoding.
    pub fn scope_of<'a>(&self, action: &'a Action) -> Option<&'a str> {
        match self {
            Self::Exact | Self::Hierarchical => action.scope(),
            Self::TypeSuffix { separator } => action
                .kind
                .split_once(*separator)
                .map(|(_, scope)| scope),
        }
    }

    /// True when a gate bound to `scope` should hand `action` to its reducer.
    pub fn matches(&self, action: &Action, scope: &Scope) -> bool {
        let Some(tag) = self.scope_of(action) else {
            return false;
        };
        match self {
            Self::Exact | Self::TypeSuffix { .. } => scope == tag,
            Self::Hierarchical => scope.contains(tag),
        }
    }

    /// The action as the inner reducer should see it.
    ///
    /// Type-suffix actions have their type restored; `meta.scope` actions are
    /// passed through as they are.
    pub fn unscoped<'a>(&self, action: &'a Action) -> Cow<'a, Action> {
        match self {
            Self::Exact | Self::Hierarchical => Cow::Borrowed(action),
            Self::TypeSuffix { separator } => match action.kind.split_once(*separator) {
                Some((base, _)) => Cow::Owned(Action {
                    kind: base.to_string(),
                    ..action.clone()
                }),
                None => Cow::Borrowed(action),
            },
        }
    }

    /// Gate decision: the action to delegate, or `None` to keep prior state.
    pub fn admit<'a>(&self, action: &'a Action, scope: &Scope) -> Option<Cow<'a, Action>> {
        self.matches(action, scope).then(|| self.unscoped(action))
    }
}

fn base_type(kind: &str, separator: char) -> &str {
    kind.split_once(separator).map_or(kind, |(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(raw: &str) -> Scope {
        Scope::new(raw).unwrap()
    }

    #[test]
    fn type_suffix_apply_is_idempotent() {
        let policy = ScopePolicy::type_suffix();
        let once = policy.apply(Action::new("SET_VALUE"), &scope("a/b"));
        let twice = policy.apply(once.clone(), &scope("a/b"));
        assert_eq!(once.kind, "SET_VALUE@a/b");
        assert_eq!(once, twice);
    }

    #[test]
    fn type_suffix_admit_restores_type() {
        let policy = ScopePolicy::type_suffix();
        let action = Action::new("SET_VALUE@form").with_payload(3);
        let admitted = policy.admit(&action, &scope("form")).unwrap();
        assert_eq!(admitted.kind, "SET_VALUE");
        assert_eq!(admitted.payload, Some(3.into()));
        assert!(policy.admit(&action, &scope("other")).is_none());
    }

    #[test]
    fn hierarchical_admits_descendants_only() {
        let policy = ScopePolicy::Hierarchical;
        let bound = scope("list");
        let child = Action::new("INC").with_scope(&scope("list/3"));
        let sibling = Action::new("INC").with_scope(&scope("list2"));
        assert!(policy.matches(&child, &bound));
        assert!(!policy.matches(&sibling, &bound));
        assert!(!ScopePolicy::Exact.matches(&child, &bound));
    }

    #[test]
    fn meta_policies_ignore_type_suffix() {
        let action = Action::new("SET_VALUE@form");
        assert!(!ScopePolicy::Exact.matches(&action, &scope("form")));
    }
}
