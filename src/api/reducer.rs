use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::actions::ApiActionType;
use crate::action::Action;
use crate::config::ApiConfig;
use crate::reducer::Reducer;

/// Lifecycle of one request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiState {
    pub is_loading: bool,
    pub data: Option<Value>,
    pub error: Option<Value>,
}

impl ApiState {
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&Value> {
        self.error.as_ref()
    }
}

/// Folds lifecycle actions into [`ApiState`].
///
/// | action                   | next state                                  |
/// |--------------------------|---------------------------------------------|
/// | `REQUEST`/`FAILURE`      | loading, no data, no error                  |
/// | `REQUEST`/`FAILURE` + `error` | not loading, no data, error = payload  |
/// | `SUCCESS`                | not loading, data = payload                 |
/// | `RESET`                  | initial state                               |
/// | anything else            | unchanged                                   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiReducer {
    /// Whether `SUCCESS` also clears an error left by an earlier failure.
    pub success_clears_error: bool,
}

impl Default for ApiReducer {
    fn default() -> Self {
        Self {
            success_clears_error: true,
        }
    }
}

impl ApiReducer {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            success_clears_error: config.success_clears_error,
        }
    }
}

impl Reducer<ApiState> for ApiReducer {
    fn reduce(&self, state: Option<ApiState>, action: &Action) -> ApiState {
        let state = state.unwrap_or_default();
        let Ok(kind) = action.kind.parse::<ApiActionType>() else {
            return state;
        };

        match kind {
            // A failure always carries the error flag. A request may carry it
            // too, which means it failed before being sent.
            ApiActionType::Request | ApiActionType::Failure if action.is_error() => ApiState {
                is_loading: false,
                data: None,
                error: action.payload.clone(),
            },
            ApiActionType::Request | ApiActionType::Failure => ApiState {
                is_loading: true,
                data: None,
                error: None,
            },
            ApiActionType::Success => ApiState {
                is_loading: false,
                data: action.payload.clone(),
                error: if self.success_clears_error {
                    None
                } else {
                    state.error
                },
            },
            ApiActionType::Reset => ApiState::default(),
        }
    }
}

/// [`ApiReducer::default`] as a plain function.
pub fn api_reducer(state: Option<ApiState>, action: &Action) -> ApiState {
    ApiReducer::default().reduce(state, action)
}
