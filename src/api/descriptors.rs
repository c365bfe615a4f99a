use serde_json::{Map, Value};
use thiserror::Error;

use crate::action::SCOPE_KEY;
use crate::scope::Scope;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("Type descriptor must be a string or an object, got {found}")]
    InvalidDescriptor { found: &'static str },
}

/// Tags the request, success and failure descriptors handed to a
/// request-issuing middleware with `scope`.
///
/// A string becomes `{ "type": <string>, "meta": { "scope": <scope> } }`. An
/// object keeps its fields and gets `scope` merged into its `meta`. Any other
/// value yields an error in its slot; the other slots are still tagged.
pub fn scope_type_descriptors(
    request: Value,
    success: Value,
    failure: Value,
    scope: &Scope,
) -> [Result<Value, DescriptorError>; 3] {
    [request, success, failure].map(|descriptor| scope_descriptor(descriptor, scope))
}

fn scope_descriptor(descriptor: Value, scope: &Scope) -> Result<Value, DescriptorError> {
    let scope_value = Value::String(scope.to_string());
    match descriptor {
        Value::String(kind) => {
            let mut meta = Map::new();
            meta.insert(SCOPE_KEY.to_string(), scope_value);
            let mut record = Map::new();
            record.insert("type".to_string(), Value::String(kind));
            record.insert("meta".to_string(), Value::Object(meta));
            Ok(Value::Object(record))
        }
        Value::Object(mut record) => {
            let mut meta = match record.remove("meta") {
                Some(Value::Object(meta)) => meta,
                _ => Map::new(),
            };
            meta.insert(SCOPE_KEY.to_string(), scope_value);
            record.insert("meta".to_string(), Value::Object(meta));
            Ok(Value::Object(record))
        }
        other => {
            let found = kind_name(&other);
            tracing::warn!(scope = %scope, "Rejected type descriptor of kind {}", found);
            Err(DescriptorError::InvalidDescriptor { found })
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
