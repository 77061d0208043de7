//! Raw value-tree passthrough fields.

use databean_json::{JsonArray, JsonObject, Value};

use super::literal::Literal;
use super::sealed::Sealed;
use super::TypeResolver;
use crate::diff::json_obj_diff;
use crate::violation::Violation;

/// Resolver for a field holding a raw [`JsonObject`].
///
/// The only resolver with a field-granular diff: the delta holds exactly
/// the top-level keys whose values differ, instead of replacing the whole
/// object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObjectResolver;

impl JsonObjectResolver {
    pub const fn new() -> Self {
        Self
    }
}

impl Sealed for JsonObjectResolver {}

impl TypeResolver<JsonObject> for JsonObjectResolver {
    fn decode(&self, value: &Value) -> Result<JsonObject, Violation> {
        Literal::decode(value)
    }

    fn encode(&self, value: &JsonObject) -> Value {
        Value::Object(value.clone())
    }

    fn diff(
        &self,
        from: Option<JsonObject>,
        to: Option<JsonObject>,
        report: &mut dyn FnMut(Value),
    ) -> Option<JsonObject> {
        match (from, to) {
            (None, to) => to,
            (Some(from), None) => {
                report(Value::Null);
                Some(from)
            }
            (Some(from), Some(to)) => {
                if from.is_empty() {
                    // Nothing to compare against: the whole `to` object is
                    // the delta and the empty `from` stays merged.
                    if !to.is_empty() {
                        report(Value::Object(to));
                    }
                    return Some(from);
                }
                let diffed = json_obj_diff(&from, &to);
                if !diffed.delta.is_empty() {
                    report(Value::Object(diffed.delta));
                }
                Some(diffed.merged)
            }
        }
    }
}

/// Resolver for a field holding a raw [`JsonArray`]; diffs atomically like
/// any other list.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArrayResolver;

impl JsonArrayResolver {
    pub const fn new() -> Self {
        Self
    }
}

impl Sealed for JsonArrayResolver {}

impl TypeResolver<JsonArray> for JsonArrayResolver {
    fn decode(&self, value: &Value) -> Result<JsonArray, Violation> {
        Literal::decode(value)
    }

    fn encode(&self, value: &JsonArray) -> Value {
        Value::Array(value.clone())
    }
}
