//! Field-level diff/merge between two records of the same shape.

use databean_json::{JsonObject, Value};

/// The outcome of diffing two records.
///
/// `delta` holds only the fields whose values differed, valued from the
/// "to" side (or explicit null where a field was removed). `merged` keeps
/// the "to" value for unchanged fields and retains the "from" value where
/// they conflict, which is the conflict-resolution default of this engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DataDiff<T> {
    pub delta: JsonObject,
    pub merged: T,
}

impl<T> DataDiff<T> {
    pub fn new(delta: JsonObject, merged: T) -> Self {
        Self { delta, merged }
    }
}

/// Key-wise diff of two raw objects.
///
/// Walks the keys of `from`: a non-null `from` value that differs from the
/// `to` side puts the `from` value into `merged` and the `to` value (or
/// null) into `delta`; otherwise the `to` value is merged. Keys present
/// only in `to` do not participate. Comparison uses the coercing value
/// equality, so numeric-subtype and wire-form differences don't register
/// as changes.
pub fn json_obj_diff(from: &JsonObject, to: &JsonObject) -> DataDiff<JsonObject> {
    let mut delta = JsonObject::new();
    let mut merged = JsonObject::new();

    for key in from.field_names() {
        let from_val = from.get_value(key).unwrap_or(Value::Null);
        let to_val = to.get_value(key).unwrap_or(Value::Null);

        if !from_val.is_null() && from_val != to_val {
            merged.put(key, from_val);
            delta.put(key, to_val);
        } else {
            merged.put(key, to_val);
        }
    }

    DataDiff::new(delta, merged)
}
