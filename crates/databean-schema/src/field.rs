//! [`SchemaField`] — a named binding between a record accessor, its type
//! resolver and a required/optional flag.

use databean_json::{JsonObject, Value};

use crate::resolver::bean::BeanResolver;
use crate::resolver::enums::{EnumResolver, NamedEnum};
use crate::resolver::list::{BeanListResolver, PlainListResolver};
use crate::resolver::literal::{Literal, LiteralResolver};
use crate::resolver::tree::{JsonArrayResolver, JsonObjectResolver};
use crate::resolver::TypeResolver;
use crate::schema::DataBean;
use crate::violation::{logical, Violation};

/// One field of a bean schema: immutable, `const`-constructible, defined
/// once per record type and shared across every decode/encode/diff call.
pub struct SchemaField<D, T, R> {
    pub name: &'static str,
    pub accessor: fn(&D) -> Option<&T>,
    resolver: R,
    required: bool,
}

impl<D, T, R: Copy> Clone for SchemaField<D, T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, T, R: Copy> Copy for SchemaField<D, T, R> {}

impl<D, T, R> SchemaField<D, T, R>
where
    T: Clone + PartialEq,
    R: TypeResolver<T>,
{
    pub const fn new(
        name: &'static str,
        accessor: fn(&D) -> Option<&T>,
        resolver: R,
        required: bool,
    ) -> Self {
        Self {
            name,
            accessor,
            resolver,
            required,
        }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Read this field from a raw object. An absent key or explicit null is
    /// a logical null: a violation when the field is required, a `None`
    /// binding otherwise. Anything else goes through the resolver.
    pub fn from_json(&self, obj: &JsonObject) -> Result<Option<T>, Violation> {
        match obj.get_value(self.name) {
            None | Some(Value::Null) => {
                if self.required {
                    Err(logical::not_null())
                } else {
                    Ok(None)
                }
            }
            Some(value) => self.resolver.decode(&value).map(Some),
        }
    }

    /// Encode this field from a bean; a null field value stays an explicit
    /// null.
    pub fn to_json(&self, bean: &D) -> Value {
        match (self.accessor)(bean) {
            Some(value) => self.resolver.encode(value),
            None => Value::Null,
        }
    }

    /// Diff this field between two beans, filing any change under the field
    /// name in `delta`; the returned value is the merged field.
    pub fn diff(&self, from: &D, to: &D, delta: &mut JsonObject) -> Option<T> {
        let from_val = (self.accessor)(from).cloned();
        let to_val = (self.accessor)(to).cloned();
        let name = self.name;
        self.resolver
            .diff(from_val, to_val, &mut |changed| {
                delta.put(name, changed);
            })
    }
}

/// A required or optional literal field.
pub const fn plain_field<D, T: Literal>(
    name: &'static str,
    accessor: fn(&D) -> Option<&T>,
    required: bool,
) -> SchemaField<D, T, LiteralResolver<T>> {
    SchemaField::new(name, accessor, LiteralResolver::new(), required)
}

/// A homogeneous list of literal elements.
pub const fn plain_list_field<D, T: Literal>(
    name: &'static str,
    accessor: fn(&D) -> Option<&Vec<T>>,
    required: bool,
) -> SchemaField<D, Vec<T>, PlainListResolver<T>> {
    SchemaField::new(name, accessor, PlainListResolver::new(), required)
}

/// A nested bean field.
pub const fn bean_field<D, B: DataBean>(
    name: &'static str,
    accessor: fn(&D) -> Option<&B>,
    required: bool,
) -> SchemaField<D, B, BeanResolver<B>> {
    SchemaField::new(name, accessor, BeanResolver::new(), required)
}

/// A homogeneous list of nested beans.
pub const fn bean_list_field<D, B: DataBean>(
    name: &'static str,
    accessor: fn(&D) -> Option<&Vec<B>>,
    required: bool,
) -> SchemaField<D, Vec<B>, BeanListResolver<B>> {
    SchemaField::new(name, accessor, BeanListResolver::new(), required)
}

/// An enum field decoded from its member name.
pub const fn enum_field<D, E: NamedEnum>(
    name: &'static str,
    accessor: fn(&D) -> Option<&E>,
    required: bool,
) -> SchemaField<D, E, EnumResolver<E>> {
    SchemaField::new(name, accessor, EnumResolver::new(), required)
}

/// A raw object passthrough field.
pub const fn json_object_field<D>(
    name: &'static str,
    accessor: fn(&D) -> Option<&JsonObject>,
    required: bool,
) -> SchemaField<D, JsonObject, JsonObjectResolver> {
    SchemaField::new(name, accessor, JsonObjectResolver::new(), required)
}

/// A raw array passthrough field.
pub const fn json_array_field<D>(
    name: &'static str,
    accessor: fn(&D) -> Option<&databean_json::JsonArray>,
    required: bool,
) -> SchemaField<D, databean_json::JsonArray, JsonArrayResolver> {
    SchemaField::new(name, accessor, JsonArrayResolver::new(), required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Holder {
        label: Option<String>,
    }

    const LABEL: SchemaField<Holder, String, LiteralResolver<String>> =
        plain_field("label", |h: &Holder| h.label.as_ref(), true);
    const NICK: SchemaField<Holder, String, LiteralResolver<String>> =
        plain_field("nick", |h: &Holder| h.label.as_ref(), false);

    #[test]
    fn required_field_rejects_absent_and_null() {
        let mut obj = JsonObject::new();
        assert_eq!(LABEL.from_json(&obj).unwrap_err().constraint, "NOT_NULL");
        obj.put_null("label");
        assert_eq!(LABEL.from_json(&obj).unwrap_err().constraint, "NOT_NULL");
    }

    #[test]
    fn optional_field_binds_null() {
        let obj = JsonObject::new();
        assert_eq!(NICK.from_json(&obj).unwrap(), None);
    }

    #[test]
    fn present_value_goes_through_the_resolver() {
        let mut obj = JsonObject::new();
        obj.put("label", "hello");
        assert_eq!(LABEL.from_json(&obj).unwrap(), Some("hello".to_string()));

        obj.put("label", 42);
        assert_eq!(LABEL.from_json(&obj).unwrap_err().constraint, "DATA_TYPE");
    }

    #[test]
    fn to_json_keeps_explicit_null() {
        let holder = Holder { label: None };
        assert_eq!(LABEL.to_json(&holder), Value::Null);
        let holder = Holder {
            label: Some("x".into()),
        };
        assert_eq!(LABEL.to_json(&holder), Value::Str("x".into()));
    }

    #[test]
    fn diff_files_changes_under_the_field_name() {
        let from = Holder {
            label: Some("Dhaka".into()),
        };
        let to = Holder {
            label: Some("Chittagong".into()),
        };
        let mut delta = JsonObject::new();
        let merged = LABEL.diff(&from, &to, &mut delta);
        assert_eq!(merged, Some("Dhaka".to_string()));
        assert_eq!(delta.get_string("label").unwrap().unwrap(), "Chittagong");
    }
}
