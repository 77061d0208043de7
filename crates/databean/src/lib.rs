//! databean — schema-driven conversion between loosely-typed JSON and
//! statically-shaped, validated records.
//!
//! The crate is a facade over the two building blocks:
//!
//! - [`databean_json`]: the ordered JSON value tree with RFC 7493 extended
//!   types (binary, timestamp, enum-as-string), its coercing structural
//!   equality, deep copy and merge.
//! - [`databean_schema`]: bean schemas assembled from per-field type
//!   resolvers, whole-record decode with multi-field violation
//!   aggregation, encode, field-level diff/merge, the schema registry and
//!   the business-rule validator layer.
//!
//! A typical boundary flow: decode incoming text into a [`JsonObject`],
//! turn it into a bean via [`ToBean::to_bean`] (collecting *all* field
//! violations in one pass), run a [`BeanValidator`] for business rules,
//! and later [`DataBean::diff_merge`] two revisions of the record to get a
//! sparse change record plus a merged state.

pub use databean_json::{codec, value, JsonArray, JsonError, JsonObject, Value};
pub use databean_schema::{
    bean_field, bean_list_field, diff, enum_field, field, json_array_field, json_object_field,
    new_violation, plain_field, plain_list_field, registry, resolver, rules, schema, validator,
    violation, BeanListResolver, BeanResolver, BeanSchema, BeanValidator, DataBean, DataDiff,
    EnumResolver, JsonArrayResolver, JsonObjectResolver, Literal, LiteralResolver, NamedEnum,
    ObjViolation, PlainListResolver, RegistryError, SchemaField, SchemaHandle, SchemaRegistry,
    SchemaRegistryBuilder, ToBean, TypeResolver, Validator, Violation,
};
pub use databean_schema::{json_obj_diff, rules::pass};
