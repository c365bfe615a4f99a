use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

use crate::action::Action;

pub const API_REQUEST: &str = "API_REQUEST";
pub const API_SUCCESS: &str = "API_SUCCESS";
pub const API_FAILURE: &str = "API_FAILURE";
pub const API_RESET: &str = "API_RESET";

/// The four lifecycle action types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiActionType {
    Request,
    Success,
    Failure,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown API action type '{0}'")]
pub struct UnknownApiAction(pub String);

impl ApiActionType {
    pub const ALL: [Self; 4] = [Self::Request, Self::Success, Self::Failure, Self::Reset];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Request => API_REQUEST,
            Self::Success => API_SUCCESS,
            Self::Failure => API_FAILURE,
            Self::Reset => API_RESET,
        }
    }

    /// Bare action of this type.
    pub fn action(self) -> Action {
        Action::new(self.as_str())
    }
}

impl fmt::Display for ApiActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiActionType {
    type Err = UnknownApiAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownApiAction(s.to_string()))
    }
}

/// Resets the lifecycle state to its initial value.
pub fn reset_data() -> Action {
    ApiActionType::Reset.action()
}

/// Starts a request.
pub fn request() -> Action {
    ApiActionType::Request.action()
}

pub fn success(payload: impl Into<Value>) -> Action {
    ApiActionType::Success.action().with_payload(payload)
}

/// A failed request; `error` becomes the action payload.
pub fn failure(error: impl Into<Value>) -> Action {
    ApiActionType::Failure
        .action()
        .with_payload(error)
        .with_error(true)
}
