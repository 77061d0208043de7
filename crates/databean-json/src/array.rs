//! [`JsonArray`] — ordered JSON sequence.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::codec;
use crate::error::JsonError;
use crate::object::JsonObject;
use crate::value::{scalar_text, Value};

/// An ordered sequence of [`Value`]s. Order is significant for both
/// identity and equality.
#[derive(Debug, Clone, Default)]
pub struct JsonArray {
    items: Vec<Value>,
}

impl JsonArray {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Decode an array from UTF-8 bytes of its text encoding.
    pub fn from_bytes(data: &[u8]) -> Result<Self, JsonError> {
        std::str::from_utf8(data)?.parse()
    }

    /// Raw stored element; `None` when the index is out of bounds.
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.items.get(idx)
    }

    /// Wire-normalized clone of the stored element.
    pub fn get_value(&self, idx: usize) -> Option<Value> {
        self.items.get(idx).map(Value::wire_value)
    }

    pub fn get_string(&self, idx: usize) -> Result<Option<String>, JsonError> {
        match self.items.get(idx) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => scalar_text(value).map(Some),
        }
    }

    pub fn get_i32(&self, idx: usize) -> Result<Option<i32>, JsonError> {
        Ok(self.get_i64(idx)?.map(|n| n as i32))
    }

    pub fn get_i64(&self, idx: usize) -> Result<Option<i64>, JsonError> {
        match self.items.get(idx) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_i64().map(Some).ok_or(JsonError::TypeMismatch {
                expected: "Number",
                found: value.type_name(),
            }),
        }
    }

    pub fn get_f64(&self, idx: usize) -> Result<Option<f64>, JsonError> {
        match self.items.get(idx) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or(JsonError::TypeMismatch {
                expected: "Number",
                found: value.type_name(),
            }),
        }
    }

    pub fn get_bool(&self, idx: usize) -> Result<Option<bool>, JsonError> {
        match self.items.get(idx) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_bool().map(Some).ok_or(JsonError::TypeMismatch {
                expected: "Boolean",
                found: value.type_name(),
            }),
        }
    }

    pub fn get_object(&self, idx: usize) -> Result<Option<&JsonObject>, JsonError> {
        match self.items.get(idx) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(obj)) => Ok(Some(obj)),
            Some(other) => Err(JsonError::TypeMismatch {
                expected: "JsonObject",
                found: other.type_name(),
            }),
        }
    }

    pub fn get_array(&self, idx: usize) -> Result<Option<&JsonArray>, JsonError> {
        match self.items.get(idx) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(arr)) => Ok(Some(arr)),
            Some(other) => Err(JsonError::TypeMismatch {
                expected: "JsonArray",
                found: other.type_name(),
            }),
        }
    }

    pub fn get_binary(&self, idx: usize) -> Result<Option<Vec<u8>>, JsonError> {
        match self.items.get(idx) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.to_binary().map(Some),
        }
    }

    pub fn get_instant(&self, idx: usize) -> Result<Option<DateTime<Utc>>, JsonError> {
        match self.items.get(idx) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.to_instant().map(Some),
        }
    }

    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    pub fn push_null(&mut self) -> &mut Self {
        self.items.push(Value::Null);
        self
    }

    /// Remove and return the element at `idx`, shifting later elements.
    pub fn remove(&mut self, idx: usize) -> Option<Value> {
        if idx < self.items.len() {
            Some(self.items.remove(idx).wire_value())
        } else {
            None
        }
    }

    /// Membership under the coercing [`Value`] equality.
    pub fn contains(&self, value: &Value) -> bool {
        self.items.iter().any(|item| item == value)
    }

    /// Deep copy, fully independent of the source.
    pub fn copy(&self) -> JsonArray {
        self.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Compact text encoding.
    pub fn encode(&self) -> String {
        codec::encode_text(&Value::Array(self.clone()), false)
    }

    /// Pretty text encoding.
    pub fn encode_pretty(&self) -> String {
        codec::encode_text(&Value::Array(self.clone()), true)
    }

    /// UTF-8 bytes of the compact encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode().into_bytes()
    }
}

/// Same length and, per index, equal values under the coercing [`Value`]
/// equality.
impl PartialEq for JsonArray {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| a == b)
    }
}

impl FromStr for JsonArray {
    type Err = JsonError;

    fn from_str(text: &str) -> Result<Self, JsonError> {
        match codec::decode_text(text)? {
            Value::Array(arr) => Ok(arr),
            _ => Err(JsonError::RootType("array")),
        }
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Vec<Value>> for JsonArray {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<T: Into<Value>> FromIterator<T> for JsonArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
