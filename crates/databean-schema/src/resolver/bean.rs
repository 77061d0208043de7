//! Nested-bean fields: delegate to the element type's own schema.

use std::marker::PhantomData;

use databean_json::Value;

use super::sealed::Sealed;
use super::TypeResolver;
use crate::schema::{BeanSchema, DataBean};
use crate::violation::{types, Violation};

/// Resolver for a field holding a bean of type `B`.
pub struct BeanResolver<B>(PhantomData<B>);

impl<B> BeanResolver<B> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<B> Clone for BeanResolver<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for BeanResolver<B> {}

impl<B> Default for BeanResolver<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Sealed for BeanResolver<B> {}

impl<B: DataBean> TypeResolver<B> for BeanResolver<B> {
    /// Requires an object; the nested schema's violation passes through
    /// unchanged.
    fn decode(&self, value: &Value) -> Result<B, Violation> {
        match value {
            Value::Object(obj) => B::Schema::from_json(obj),
            _ => Err(types::bean_type(B::Schema::name())),
        }
    }

    fn encode(&self, bean: &B) -> Value {
        Value::Object(B::Schema::to_json(bean))
    }

    /// Field-path-shaped diff: only the nested non-empty delta is
    /// reported, not the whole nested value; the nested merged bean
    /// becomes the merged field.
    fn diff(
        &self,
        from: Option<B>,
        to: Option<B>,
        report: &mut dyn FnMut(Value),
    ) -> Option<B> {
        match (from, to) {
            (None, to) => to,
            (Some(from), None) => {
                report(Value::Null);
                Some(from)
            }
            (Some(from), Some(to)) => {
                let nested = B::Schema::diff(&from, &to);
                if !nested.delta.is_empty() {
                    report(Value::Object(nested.delta));
                }
                Some(nested.merged)
            }
        }
    }
}
