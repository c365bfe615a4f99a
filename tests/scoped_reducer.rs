mod common;

use common::{counter, inc_reducer, scope, INC};
use scoped_state::api::{self, ApiReducer, ApiState};
use scoped_state::{
    json_reducer, scoped_reducer, Action, CombinedReducer, Reducer, ScopePolicy, ScopedReducer,
};
use serde_json::{json, Value};

#[test]
fn scoped_reducer_runs_only_when_scope_matches() {
    let reducer = CombinedReducer::new()
        .with("a", inc_reducer)
        .with("b", scoped_reducer(inc_reducer, scope("b")));

    let state = reducer.reduce(
        Some(json!({ "a": 0, "b": 0 })),
        &Action::new(INC).with_meta("scope", "x"),
    );
    assert_eq!(state, json!({ "a": 1, "b": 0 }));

    let state = reducer.reduce(Some(state), &Action::new(INC).with_meta("scope", "b"));
    assert_eq!(state, json!({ "a": 2, "b": 1 }));
}

#[test]
fn missing_scope_leaves_state_unchanged() {
    let reducer = scoped_reducer(counter, scope("xyz"));

    let unscoped = Action::new(INC).with_meta("scope", Value::Null);
    assert_eq!(reducer.reduce(Some(3), &unscoped), 3);
    assert_eq!(reducer.reduce(Some(3), &Action::new(INC)), 3);

    let scoped = Action::new(INC).with_meta("scope", "xyz");
    assert_eq!(reducer.reduce(Some(3), &scoped), 4);
}

#[test]
fn uninitialised_state_always_delegates() {
    let reducer = scoped_reducer(counter, scope("xyz"));
    assert_eq!(reducer.reduce(None, &Action::new("@@INIT")), 0);
    assert_eq!(reducer.reduce(None, &Action::new(INC)), 1);
}

#[test]
fn exact_policy_ignores_child_scopes() {
    let reducer = scoped_reducer(counter, scope("list"));
    let child = Action::new(INC).with_meta("scope", "list/1");
    assert_eq!(reducer.reduce(Some(0), &child), 0);
}

#[test]
fn hierarchical_policy_cascades_to_parent() {
    let parent = ScopedReducer::with_policy(counter, scope("list"), ScopePolicy::Hierarchical);

    let child = Action::new(INC).with_meta("scope", "list/1");
    let sibling = Action::new(INC).with_meta("scope", "list2");

    assert_eq!(parent.reduce(Some(0), &child), 1);
    assert_eq!(parent.reduce(Some(0), &sibling), 0);
}

#[test]
fn type_suffix_policy_delegates_with_unscoped_type() {
    let reducer = ScopedReducer::with_policy(counter, scope("b"), ScopePolicy::type_suffix());

    assert_eq!(reducer.reduce(Some(0), &Action::new("inc@b")), 1);
    assert_eq!(reducer.reduce(Some(0), &Action::new("inc@a")), 0);
    assert_eq!(reducer.reduce(Some(0), &Action::new(INC)), 0);
    assert_eq!(reducer.reduce(None, &Action::new("inc@a")), 1);
}

#[test]
fn nested_scopes_compose() {
    let lists = CombinedReducer::new()
        .with("1", scoped_reducer(inc_reducer, scope("lists/1")))
        .with("2", scoped_reducer(inc_reducer, scope("lists/2")));
    let root = CombinedReducer::new().with("lists", lists);

    let state = root.reduce(None, &Action::new("@@INIT"));
    assert_eq!(state, json!({ "lists": { "1": 0, "2": 0 } }));

    let state = root.reduce(Some(state), &Action::new(INC).with_meta("scope", "lists/2"));
    assert_eq!(state, json!({ "lists": { "1": 0, "2": 1 } }));
}

#[test]
fn combined_reducer_replaces_duplicate_keys() {
    let reducer = CombinedReducer::new()
        .with("a", inc_reducer)
        .with("a", scoped_reducer(inc_reducer, scope("a")));
    assert_eq!(reducer.keys().collect::<Vec<_>>(), vec!["a"]);

    let state = reducer.reduce(Some(json!({ "a": 0 })), &Action::new(INC));
    assert_eq!(state, json!({ "a": 0 }));
}

#[test]
fn typed_lifecycle_mounts_under_scope() {
    let reducer = CombinedReducer::new()
        .with(
            "users",
            scoped_reducer(json_reducer::<_, ApiState>(ApiReducer::default()), scope("users")),
        )
        .with(
            "posts",
            scoped_reducer(json_reducer::<_, ApiState>(ApiReducer::default()), scope("posts")),
        );

    let state = reducer.reduce(None, &Action::new("@@INIT"));
    let state = reducer.reduce(Some(state), &api::request().with_meta("scope", "users"));

    assert_eq!(
        state,
        json!({
            "users": { "isLoading": true, "data": null, "error": null },
            "posts": { "isLoading": false, "data": null, "error": null },
        })
    );
}

#[test]
fn undecodable_slice_is_reinitialised() {
    let reducer = json_reducer::<_, ApiState>(ApiReducer::default());
    let state = reducer.reduce(Some(json!("garbage")), &Action::new("@@INIT"));
    assert_eq!(
        state,
        json!({ "isLoading": false, "data": null, "error": null })
    );
}

/// Decodes from anything; never encodes.
struct Unencodable;

impl serde::Serialize for Unencodable {
    fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("cannot encode"))
    }
}

impl<'de> serde::Deserialize<'de> for Unencodable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <serde::de::IgnoredAny as serde::Deserialize>::deserialize(deserializer).map(|_| Unencodable)
    }
}

fn unencodable(_: Option<Unencodable>, _: &Action) -> Unencodable {
    Unencodable
}

#[test]
fn encoding_failure_keeps_prior_slice() {
    let reducer = json_reducer::<_, Unencodable>(unencodable);

    let state = reducer.reduce(Some(json!({ "keep": 1 })), &Action::new(INC));
    assert_eq!(state, json!({ "keep": 1 }));

    assert_eq!(reducer.reduce(None, &Action::new(INC)), Value::Null);
}
