//! Schema layer over the [`databean_json`] value tree.
//!
//! A *bean* is a statically-shaped record type. Its [`BeanSchema`] knows,
//! field by field, how to decode a [`JsonObject`](databean_json::JsonObject)
//! into the record (validating along the way and aggregating every field
//! failure into one [`Violation`]), how to encode the record back, and how
//! to compute a field-level diff between two records of the same shape.
//!
//! The per-field strategies live in the closed [`resolver`] family; the
//! [`validator`] module layers business rules on top of already-decoded
//! beans, reusing the same violation-aggregation discipline.

pub mod diff;
pub mod field;
pub mod registry;
pub mod resolver;
pub mod rules;
pub mod schema;
pub mod validator;
pub mod violation;

pub use diff::{json_obj_diff, DataDiff};
pub use field::{
    bean_field, bean_list_field, enum_field, json_array_field, json_object_field, plain_field,
    plain_list_field, SchemaField,
};
pub use registry::{RegistryError, SchemaHandle, SchemaRegistry, SchemaRegistryBuilder};
pub use resolver::bean::BeanResolver;
pub use resolver::enums::{EnumResolver, NamedEnum};
pub use resolver::list::{BeanListResolver, PlainListResolver};
pub use resolver::literal::{Literal, LiteralResolver};
pub use resolver::tree::{JsonArrayResolver, JsonObjectResolver};
pub use resolver::TypeResolver;
pub use schema::{new_violation, BeanSchema, DataBean, ToBean};
pub use validator::{BeanValidator, Validator};
pub use violation::{ObjViolation, Violation};
