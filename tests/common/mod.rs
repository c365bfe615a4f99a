//! Shared test helpers.

#![allow(dead_code)]

use scoped_state::{Action, Dispatchable, Scope};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

pub const INC: &str = "inc";

pub fn scope(raw: &str) -> Scope {
    Scope::new(raw).expect("valid scope")
}

/// Counts `INC` actions.
pub fn inc_reducer(state: Option<Value>, action: &Action) -> Value {
    let count = state.and_then(|s| s.as_i64()).unwrap_or(0);
    if action.kind == INC {
        Value::from(count + 1)
    } else {
        Value::from(count)
    }
}

pub fn counter(state: Option<i64>, action: &Action) -> i64 {
    let count = state.unwrap_or(0);
    if action.kind == INC {
        count + 1
    } else {
        count
    }
}

pub fn set_value(value: &str) -> Action {
    Action::new("SET_VALUE").with_payload(value)
}

/// A dispatch that records every call.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Dispatchable>>>,
}

impl Recorder {
    pub fn dispatch(&self) -> impl FnMut(Dispatchable) + 'static {
        let calls = Rc::clone(&self.calls);
        move |input| calls.borrow_mut().push(input)
    }

    pub fn calls(&self) -> Vec<Dispatchable> {
        self.calls.borrow().clone()
    }
}
