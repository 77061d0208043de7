//! [`JsonObject`] — insertion-ordered JSON object.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::array::JsonArray;
use crate::codec;
use crate::error::JsonError;
use crate::value::{scalar_text, Value};

/// An ordered mapping from unique text keys to [`Value`]s.
///
/// Insertion order is preserved and significant for encoding and iteration,
/// but irrelevant to equality. An explicitly stored null is distinct from an
/// absent key (`contains_key` tells them apart). Removing a key and putting
/// it back moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct JsonObject {
    map: IndexMap<String, Value>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Decode an object from UTF-8 bytes of its text encoding.
    pub fn from_bytes(data: &[u8]) -> Result<Self, JsonError> {
        std::str::from_utf8(data)?.parse()
    }

    /// Raw stored value; `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// Wire-normalized clone of the stored value: extended scalars are
    /// rendered to their string wire form, containers are cloned as-is.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.map.get(key).map(Value::wire_value)
    }

    /// String rendering of any stored scalar; extended types render their
    /// wire text, numbers and booleans their display form.
    pub fn get_string(&self, key: &str) -> Result<Option<String>, JsonError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => scalar_text(value).map(Some),
        }
    }

    pub fn get_i32(&self, key: &str) -> Result<Option<i32>, JsonError> {
        Ok(self.get_i64(key)?.map(|n| n as i32))
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, JsonError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_i64().map(Some).ok_or(JsonError::TypeMismatch {
                expected: "Number",
                found: value.type_name(),
            }),
        }
    }

    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, JsonError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or(JsonError::TypeMismatch {
                expected: "Number",
                found: value.type_name(),
            }),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, JsonError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_bool().map(Some).ok_or(JsonError::TypeMismatch {
                expected: "Boolean",
                found: value.type_name(),
            }),
        }
    }

    pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>, JsonError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(obj)) => Ok(Some(obj)),
            Some(other) => Err(JsonError::TypeMismatch {
                expected: "JsonObject",
                found: other.type_name(),
            }),
        }
    }

    pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>, JsonError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(arr)) => Ok(Some(arr)),
            Some(other) => Err(JsonError::TypeMismatch {
                expected: "JsonArray",
                found: other.type_name(),
            }),
        }
    }

    /// Binary content of the value: stored bytes as-is, stored text decoded
    /// as URL-safe unpadded base64 per the wire convention.
    pub fn get_binary(&self, key: &str) -> Result<Option<Vec<u8>>, JsonError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.to_binary().map(Some),
        }
    }

    /// Timestamp content of the value: a stored instant as-is, stored text
    /// parsed as ISO-8601 and normalized to UTC.
    pub fn get_instant(&self, key: &str) -> Result<Option<DateTime<Utc>>, JsonError> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.to_instant().map(Some),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Store a value, overwriting any previous entry under the key.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.map.insert(key.into(), value.into());
        self
    }

    /// Store an explicit null, distinguishable from key absence.
    pub fn put_null(&mut self, key: impl Into<String>) -> &mut Self {
        self.map.insert(key.into(), Value::Null);
        self
    }

    /// Remove an entry, returning the wire-normalized previous value.
    /// Remaining entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.shift_remove(key).map(|v| v.wire_value())
    }

    /// Merge in another object, overwriting matching keys wholesale.
    pub fn merge_in(&mut self, other: &JsonObject) -> &mut Self {
        self.merge_in_depth(other, 1)
    }

    /// Full-depth recursive merge; arrays are treated like any other entry
    /// and replaced entirely.
    pub fn merge_in_deep(&mut self, other: &JsonObject) -> &mut Self {
        self.merge_in_depth(other, usize::MAX)
    }

    /// Merge recursively up to `depth` levels. Depth 0 is a no-op, depth 1
    /// overwrites matching keys wholesale, a greater depth recurses into a
    /// key only while both sides hold objects.
    pub fn merge_in_depth(&mut self, other: &JsonObject, depth: usize) -> &mut Self {
        if depth == 0 {
            return self;
        }
        for (key, incoming) in other.iter() {
            match (self.map.get_mut(key), incoming) {
                (Some(Value::Object(existing)), Value::Object(nested)) if depth > 1 => {
                    existing.merge_in_depth(nested, depth - 1);
                }
                _ => {
                    self.map.insert(key.clone(), incoming.clone());
                }
            }
        }
        self
    }

    /// Deep copy. The value universe is closed and fully owned, so the copy
    /// is total and completely independent of the source.
    pub fn copy(&self) -> JsonObject {
        self.clone()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) -> &mut Self {
        self.map.clear();
        self
    }

    /// Compact text encoding.
    pub fn encode(&self) -> String {
        codec::encode_text(&Value::Object(self.clone()), false)
    }

    /// Pretty text encoding for human inspection.
    pub fn encode_pretty(&self) -> String {
        codec::encode_text(&Value::Object(self.clone()), true)
    }

    /// UTF-8 bytes of the compact encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode().into_bytes()
    }
}

/// Same key set and, per key, equal values under the coercing [`Value`]
/// equality; insertion order does not participate.
impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .map
                .iter()
                .all(|(key, value)| other.map.get(key).is_some_and(|o| value == o))
    }
}

impl FromStr for JsonObject {
    type Err = JsonError;

    fn from_str(text: &str) -> Result<Self, JsonError> {
        match codec::decode_text(text)? {
            Value::Object(obj) => Ok(obj),
            _ => Err(JsonError::RootType("object")),
        }
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<IndexMap<String, Value>> for JsonObject {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self { map }
    }
}

impl FromIterator<(String, Value)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
