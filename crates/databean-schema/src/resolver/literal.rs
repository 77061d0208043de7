//! Literal field values and their resolver.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use databean_json::value::{from_base64, parse_instant};
use databean_json::{JsonArray, JsonObject, Value};

use super::sealed::Sealed;
use super::TypeResolver;
use crate::violation::{types, Violation};

/// A scalar (or raw-tree) field value with a direct wire representation.
///
/// Sealed: the literal universe is fixed. `decode` applies the documented
/// widenings for the type (`i64` accepts ints and `L`-suffixed numeric
/// text, binary accepts base64 text, instants accept ISO text);
/// `decode_item` is the strict per-element form used inside plain lists,
/// where no widening applies.
pub trait Literal: Clone + PartialEq + Sealed + Sized {
    /// Element-type name reported in list violations.
    const TYPE_NAME: &'static str;

    fn decode(value: &Value) -> Result<Self, Violation>;

    fn decode_item(value: &Value) -> Option<Self>;

    fn encode(&self) -> Value;
}

impl Sealed for i32 {}

impl Literal for i32 {
    const TYPE_NAME: &'static str = "Integer";

    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Int(n) => i32::try_from(*n).map_err(|_| types::integer_type()),
            _ => Err(types::integer_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => i32::try_from(*n).ok(),
            _ => None,
        }
    }

    fn encode(&self) -> Value {
        Value::Int(i64::from(*self))
    }
}

impl Sealed for i64 {}

impl Literal for i64 {
    const TYPE_NAME: &'static str = "Long";

    /// The one documented widening: ints re-box, numeric text with a
    /// trailing `L` suffix is stripped before parse.
    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Int(n) => Ok(*n),
            Value::Str(s) => {
                let digits = s.strip_suffix('L').unwrap_or(s);
                digits.parse().map_err(|_| types::long_type())
            }
            _ => Err(types::long_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    fn encode(&self) -> Value {
        Value::Int(*self)
    }
}

impl Sealed for f64 {}

impl Literal for f64 {
    const TYPE_NAME: &'static str = "Double";

    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Float(f) => Ok(*f),
            _ => Err(types::double_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn encode(&self) -> Value {
        Value::Float(*self)
    }
}

impl Sealed for bool {}

impl Literal for bool {
    const TYPE_NAME: &'static str = "Boolean";

    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(types::boolean_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Sealed for String {}

impl Literal for String {
    const TYPE_NAME: &'static str = "String";

    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Str(s) => Ok(s.clone()),
            _ => Err(types::string_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn encode(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl Sealed for Vec<u8> {}

impl Literal for Vec<u8> {
    const TYPE_NAME: &'static str = "Binary";

    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Bytes(data) => Ok(data.clone()),
            Value::Str(s) => from_base64(s).map_err(|_| types::binary_type()),
            _ => Err(types::binary_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        match value {
            Value::Bytes(data) => Some(data.clone()),
            _ => None,
        }
    }

    fn encode(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Sealed for DateTime<Utc> {}

impl Literal for DateTime<Utc> {
    const TYPE_NAME: &'static str = "Instant";

    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Instant(at) => Ok(*at),
            Value::Str(s) => parse_instant(s).map_err(|_| types::instant_utc_type()),
            _ => Err(types::instant_utc_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        match value {
            Value::Instant(at) => Some(*at),
            _ => None,
        }
    }

    fn encode(&self) -> Value {
        Value::Instant(*self)
    }
}

impl Sealed for JsonObject {}

impl Literal for JsonObject {
    const TYPE_NAME: &'static str = "JsonObject";

    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Object(obj) => Ok(obj.clone()),
            _ => Err(types::json_obj_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }

    fn encode(&self) -> Value {
        Value::Object(self.clone())
    }
}

impl Sealed for JsonArray {}

impl Literal for JsonArray {
    const TYPE_NAME: &'static str = "JsonArray";

    fn decode(value: &Value) -> Result<Self, Violation> {
        match value {
            Value::Array(arr) => Ok(arr.clone()),
            _ => Err(types::json_arr_type()),
        }
    }

    fn decode_item(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }

    fn encode(&self) -> Value {
        Value::Array(self.clone())
    }
}

/// Resolver for any [`Literal`] field.
pub struct LiteralResolver<T>(PhantomData<T>);

impl<T> LiteralResolver<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for LiteralResolver<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LiteralResolver<T> {}

impl<T> Default for LiteralResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sealed for LiteralResolver<T> {}

impl<T: Literal> TypeResolver<T> for LiteralResolver<T> {
    fn decode(&self, value: &Value) -> Result<T, Violation> {
        T::decode(value)
    }

    fn encode(&self, value: &T) -> Value {
        value.encode()
    }
}
