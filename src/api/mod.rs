//! Request lifecycle state: loading, data, error.
//!
//! A request-issuing middleware dispatches [`ApiActionType::Request`], then
//! [`ApiActionType::Success`] or [`ApiActionType::Failure`]. [`ApiReducer`]
//! folds those into an [`ApiState`]. Mount it under a
//! [`ScopedReducer`](crate::reducer::ScopedReducer) and tag the middleware's
//! descriptors with [`scope_type_descriptors`] to run one lifecycle per
//! scope.

mod actions;
mod descriptors;
mod reducer;
mod selectors;

pub use actions::{
    failure, request, reset_data, success, ApiActionType, UnknownApiAction, API_FAILURE,
    API_REQUEST, API_RESET, API_SUCCESS,
};
pub use descriptors::{scope_type_descriptors, DescriptorError};
pub use reducer::{api_reducer, ApiReducer, ApiState};
pub use selectors::{get_data, get_error, get_loading};
