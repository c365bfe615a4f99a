mod common;

use common::scope;
use scoped_state::{get_state_slice, Scope, ScopeError};
use serde_json::json;

#[test]
fn resolves_nested_path() {
    let state = json!({ "a": { "b": { "c": 5 } } });
    assert_eq!(get_state_slice(&state, &scope("a/b/c")), Some(&json!(5)));
}

#[test]
fn missing_leaf_is_none() {
    let state = json!({ "a": { "b": { "c": 5 } } });
    assert_eq!(get_state_slice(&state, &scope("a/b/x")), None);
}

#[test]
fn missing_intermediate_is_none() {
    let state = json!({ "a": { "b": { "c": 5 } } });
    assert_eq!(get_state_slice(&state, &scope("a/x/c")), None);
}

#[test]
fn scalar_intermediate_is_none() {
    let state = json!({ "a": 1 });
    assert_eq!(get_state_slice(&state, &scope("a/b")), None);
}

#[test]
fn single_segment_addresses_top_level_key() {
    let state = json!({ "filters": { "count": 5 } });
    assert_eq!(
        get_state_slice(&state, &scope("filters")),
        Some(&json!({ "count": 5 }))
    );
}

#[test]
fn array_segments_index_by_position() {
    let state = json!({ "lists": [{ "n": 0 }, { "n": 1 }] });
    assert_eq!(get_state_slice(&state, &scope("lists/1/n")), Some(&json!(1)));
    assert_eq!(get_state_slice(&state, &scope("lists/2")), None);
    assert_eq!(get_state_slice(&state, &scope("lists/first")), None);
}

#[test]
fn scope_parses_and_displays() {
    let parsed: Scope = "widgets/42".parse().unwrap();
    assert_eq!(parsed.to_string(), "widgets/42");
    assert_eq!(parsed.segments().collect::<Vec<_>>(), vec!["widgets", "42"]);
    assert_eq!(parsed.depth(), 2);
}

#[test]
fn empty_scope_is_rejected() {
    assert_eq!("".parse::<Scope>(), Err(ScopeError::Empty));
    assert!(matches!(
        Scope::new("a//b"),
        Err(ScopeError::EmptySegment { index: 1, .. })
    ));
}

#[test]
fn scope_deserialization_validates() {
    let ok: Scope = serde_json::from_value(json!("a/b")).unwrap();
    assert_eq!(ok, "a/b");
    assert!(serde_json::from_value::<Scope>(json!("a/")).is_err());
    assert_eq!(serde_json::to_value(&ok).unwrap(), json!("a/b"));
}
