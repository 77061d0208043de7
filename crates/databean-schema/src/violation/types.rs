//! Type-mismatch violation constructors used by the resolver family.

use databean_json::{JsonObject, Value};

use super::Violation;
use crate::resolver::enums::NamedEnum;

const TYPE_CONSTRAINT: &str = "DATA_TYPE";

pub fn string_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "String")
}

pub fn integer_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "Integer")
}

pub fn long_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "LONG_STRING")
}

pub fn double_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "Double")
}

pub fn boolean_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "Boolean")
}

pub fn instant_utc_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "Instant UTC[YYYY-MM-DDTHH:MM:ss.SSSZ]")
}

pub fn binary_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "Binary[base64url]")
}

pub fn json_obj_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "JsonObject")
}

pub fn json_arr_type() -> Violation {
    Violation::with_ctx(TYPE_CONSTRAINT, "JsonArray")
}

/// Enum-domain violation; the context spells out the full legal member set,
/// e.g. `Gender{ male, female, unknown }`.
pub fn enum_type<E: NamedEnum>() -> Violation {
    let members: Vec<&str> = E::MEMBERS.iter().map(|m| m.name()).collect();
    Violation::with_ctx(
        "ENUM_TYPE",
        format!("{}{{ {} }}", E::TYPE_NAME, members.join(", ")),
    )
}

/// List-wide violation for a homogeneous plain list, naming the expected
/// element type.
pub fn plain_data_list(element_type: &str) -> Violation {
    Violation::with_ctx("PLAIN_DATA_LIST_TYPE", element_type)
}

/// Per-index bean-list violation: wraps the offending element's violation
/// under an `idx-<i>` key.
pub fn bean_item(idx: usize, violation: Violation) -> Violation {
    let mut ctx = JsonObject::new();
    ctx.put(format!("idx-{idx}"), violation);
    Violation::with_ctx("BEAN_LIST_TYPE", Value::Object(ctx))
}

pub fn bean_type(schema_name: &str) -> Violation {
    Violation::with_ctx("BEAN_TYPE", schema_name)
}
