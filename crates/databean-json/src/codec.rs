//! Text codec between the value tree and its JSON wire form.
//!
//! Built on `serde_json` with `preserve_order`, so object key order
//! survives a round trip. Encoding applies the extended-type wire
//! convention recursively: after encode the output contains only
//! `null | bool | number | string | object | array`. Numbers may change
//! subtype across a round trip (e.g. `Int` → `Float`); the coercing value
//! equality absorbs that.

use serde_json::Value as SerdeValue;

use crate::array::JsonArray;
use crate::error::JsonError;
use crate::object::JsonObject;
use crate::value::Value;

/// Decode JSON text into a value tree.
pub fn decode_text(text: &str) -> Result<Value, JsonError> {
    let parsed: SerdeValue = serde_json::from_str(text)?;
    Ok(from_serde(parsed))
}

/// Decode UTF-8 JSON bytes into a value tree.
pub fn decode_bytes(data: &[u8]) -> Result<Value, JsonError> {
    decode_text(std::str::from_utf8(data)?)
}

/// Encode a value tree as JSON text, compact or pretty.
pub fn encode_text(value: &Value, pretty: bool) -> String {
    let wire = to_serde(value);
    let out = if pretty {
        serde_json::to_string_pretty(&wire)
    } else {
        serde_json::to_string(&wire)
    };
    out.expect("a JSON tree always serializes")
}

fn to_serde(value: &Value) -> SerdeValue {
    match value {
        Value::Null => SerdeValue::Null,
        Value::Bool(b) => SerdeValue::Bool(*b),
        Value::Int(n) => SerdeValue::Number((*n).into()),
        // JSON has no representation for non-finite floats; they encode
        // as null.
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(SerdeValue::Number)
            .unwrap_or(SerdeValue::Null),
        Value::Str(s) => SerdeValue::String(s.clone()),
        Value::Bytes(_) | Value::Instant(_) | Value::Enum(_) => match value.wire_value() {
            Value::Str(s) => SerdeValue::String(s),
            _ => SerdeValue::Null,
        },
        Value::Object(obj) => SerdeValue::Object(
            obj.iter()
                .map(|(key, val)| (key.clone(), to_serde(val)))
                .collect(),
        ),
        Value::Array(arr) => SerdeValue::Array(arr.iter().map(to_serde).collect()),
    }
}

fn from_serde(value: SerdeValue) -> Value {
    match value {
        SerdeValue::Null => Value::Null,
        SerdeValue::Bool(b) => Value::Bool(b),
        SerdeValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        SerdeValue::String(s) => Value::Str(s),
        SerdeValue::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key, from_serde(val)))
                .collect(),
        ),
        SerdeValue::Array(items) => {
            Value::Array(JsonArray::from(
                items.into_iter().map(from_serde).collect::<Vec<_>>(),
            ))
        }
    }
}
