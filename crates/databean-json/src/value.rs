//! [`Value`] — the restricted JSON value universe.

use std::borrow::Cow;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::array::JsonArray;
use crate::error::JsonError;
use crate::object::JsonObject;

/// A JSON value, extended per RFC 7493 with binary data, timestamps and
/// enum member names.
///
/// The extended variants (`Bytes`, `Instant`, `Enum`) have no native JSON
/// representation: encoding materializes them as strings and a decoded tree
/// only ever contains `Null | Bool | Int | Float | Str | Object | Array`.
/// They re-materialize to their rich form on explicit typed access.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Instant(DateTime<Utc>),
    Enum(String),
    Object(JsonObject),
    Array(JsonArray),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Human-readable name of the stored shape, used in error reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "Boolean",
            Value::Int(_) => "Integer",
            Value::Float(_) => "Double",
            Value::Str(_) => "String",
            Value::Bytes(_) => "Binary",
            Value::Instant(_) => "Instant",
            Value::Enum(_) => "Enum",
            Value::Object(_) => "JsonObject",
            Value::Array(_) => "JsonArray",
        }
    }

    /// Shallow wire normalization: extended scalars become their string wire
    /// form, every other variant is cloned as-is. Containers are *not*
    /// recursed into; full normalization happens in the codec.
    pub fn wire_value(&self) -> Value {
        match self {
            Value::Bytes(data) => Value::Str(to_base64(data)),
            Value::Instant(at) => Value::Str(format_instant(at)),
            Value::Enum(name) => Value::Str(name.clone()),
            other => other.clone(),
        }
    }

    /// The wire text of a text-like value (`Str`, `Enum`, `Instant`,
    /// `Bytes`), `None` for anything else.
    pub(crate) fn wire_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Str(s) => Some(Cow::Borrowed(s)),
            Value::Enum(name) => Some(Cow::Borrowed(name)),
            Value::Instant(at) => Some(Cow::Owned(format_instant(at))),
            Value::Bytes(data) => Some(Cow::Owned(to_base64(data))),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Enum(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Materialize binary content: stored `Bytes` as-is, stored text as
    /// base64 per the wire convention.
    pub fn to_binary(&self) -> Result<Vec<u8>, JsonError> {
        match self {
            Value::Bytes(data) => Ok(data.clone()),
            Value::Str(s) => Ok(from_base64(s)?),
            other => Err(JsonError::TypeMismatch {
                expected: "Binary",
                found: other.type_name(),
            }),
        }
    }

    /// Materialize a timestamp: stored `Instant` as-is, stored text parsed
    /// as ISO-8601 and normalized to UTC.
    pub fn to_instant(&self) -> Result<DateTime<Utc>, JsonError> {
        match self {
            Value::Instant(at) => Ok(*at),
            Value::Str(s) => Ok(parse_instant(s)?),
            other => Err(JsonError::TypeMismatch {
                expected: "Instant",
                found: other.type_name(),
            }),
        }
    }
}

/// Structural equality with representation coercion.
///
/// Numbers compare as `f64` when either side is floating, else as `i64`;
/// text-like values compare by wire-text content regardless of concrete
/// representation. Decode paths may produce `Int` where another produced
/// `Float` for the same logical number, and a re-parsed tree holds `Str`
/// where the original held an extended scalar, so both must compare equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Instant(a), Value::Instant(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (a, b) => match (a.wire_text(), b.wire_text()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Instant(v)
    }
}

impl From<JsonObject> for Value {
    fn from(v: JsonObject) -> Self {
        Value::Object(v)
    }
}

impl From<JsonArray> for Value {
    fn from(v: JsonArray) -> Self {
        Value::Array(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// String rendering of a scalar: text-like values render their wire text,
/// numbers and booleans their display form; containers cannot be rendered.
pub(crate) fn scalar_text(value: &Value) -> Result<String, JsonError> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(n) => Ok(n.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        other => match other.wire_text() {
            Some(text) => Ok(text.into_owned()),
            None => Err(JsonError::TypeMismatch {
                expected: "String",
                found: other.type_name(),
            }),
        },
    }
}

/// Encode bytes for the wire: URL-safe base64 without padding.
pub fn to_base64(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode URL-safe unpadded base64 text.
pub fn from_base64(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(text)
}

/// Format a timestamp for the wire: ISO-8601 UTC, millisecond precision,
/// trailing `Z`.
pub fn format_instant(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse ISO-8601 timestamp text, normalizing any offset to UTC.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
}
