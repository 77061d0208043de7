//! Business-rule violation constructors used by the validator layer.

use databean_json::{JsonObject, Value};

use super::Violation;

pub fn not_null() -> Violation {
    Violation::new("NOT_NULL")
}

pub fn equal_bound(expected: impl Into<Value>) -> Violation {
    Violation::with_ctx("EQUAL_BOUND", expected)
}

pub fn set_bound(allowed: Vec<Value>) -> Violation {
    Violation::with_ctx("SET_BOUND", Value::Array(allowed.into()))
}

pub fn max_bound(bound: impl Into<Value>) -> Violation {
    Violation::with_ctx("MAX_BOUND", bound)
}

pub fn min_bound(bound: impl Into<Value>) -> Violation {
    Violation::with_ctx("MIN_BOUND", bound)
}

pub fn less_than_bound(bound: impl Into<Value>) -> Violation {
    Violation::with_ctx("LESS_THAN_BOUND", bound)
}

pub fn greater_than_bound(bound: impl Into<Value>) -> Violation {
    Violation::with_ctx("GREATER_THAN_BOUND", bound)
}

pub fn range_bound(
    constraint: &'static str,
    left: impl Into<Value>,
    right: impl Into<Value>,
) -> Violation {
    let mut ctx = JsonObject::new();
    ctx.put("cardinal_left", left).put("cardinal_right", right);
    Violation::with_ctx(constraint, Value::Object(ctx))
}
