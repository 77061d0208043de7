//! Homogeneous list fields.
//!
//! Plain lists fail list-wide on any element mismatch; bean lists fail on
//! the first offending index, wrapping that element's violation under an
//! `idx-<i>` key. Both diff atomically: a list is replaced wholesale.

use std::marker::PhantomData;

use databean_json::{JsonArray, Value};

use super::literal::Literal;
use super::sealed::Sealed;
use super::TypeResolver;
use crate::schema::{BeanSchema, DataBean};
use crate::violation::{types, Violation};

/// Resolver for a homogeneous list of literal elements.
pub struct PlainListResolver<T>(PhantomData<T>);

impl<T> PlainListResolver<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for PlainListResolver<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PlainListResolver<T> {}

impl<T> Default for PlainListResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sealed for PlainListResolver<T> {}

impl<T: Literal> TypeResolver<Vec<T>> for PlainListResolver<T> {
    /// Every element must match the element type exactly; no widening
    /// inside lists. Any mismatch fails the whole list with one violation
    /// naming the element type (list-wide, not per-index).
    fn decode(&self, value: &Value) -> Result<Vec<T>, Violation> {
        let arr = match value {
            Value::Array(arr) => arr,
            _ => return Err(types::plain_data_list(T::TYPE_NAME)),
        };
        let mut out = Vec::with_capacity(arr.len());
        for item in arr.iter() {
            match T::decode_item(&item.wire_value()) {
                Some(element) => out.push(element),
                None => return Err(types::plain_data_list(T::TYPE_NAME)),
            }
        }
        Ok(out)
    }

    fn encode(&self, list: &Vec<T>) -> Value {
        Value::Array(list.iter().map(Literal::encode).collect::<Vec<_>>().into())
    }
}

/// Resolver for a homogeneous list of beans.
pub struct BeanListResolver<B>(PhantomData<B>);

impl<B> BeanListResolver<B> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<B> Clone for BeanListResolver<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for BeanListResolver<B> {}

impl<B> Default for BeanListResolver<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> Sealed for BeanListResolver<B> {}

impl<B: DataBean> TypeResolver<Vec<B>> for BeanListResolver<B> {
    /// Walks elements in order; the first failing index aborts the decode
    /// with one violation keyed `idx-<i>` wrapping the element's own
    /// violation. Later invalid elements stay unreported.
    fn decode(&self, value: &Value) -> Result<Vec<B>, Violation> {
        let arr = match value {
            Value::Array(arr) => arr,
            _ => return Err(types::plain_data_list("JsonObject")),
        };
        let mut out = Vec::with_capacity(arr.len());
        for (idx, item) in arr.iter().enumerate() {
            let obj = match item {
                Value::Object(obj) => obj,
                _ => {
                    return Err(types::bean_item(
                        idx,
                        types::bean_type(B::Schema::name()),
                    ))
                }
            };
            match B::Schema::from_json(obj) {
                Ok(bean) => out.push(bean),
                Err(violation) => return Err(types::bean_item(idx, violation)),
            }
        }
        Ok(out)
    }

    fn encode(&self, list: &Vec<B>) -> Value {
        Value::Array(
            list.iter()
                .map(|bean| Value::Object(B::Schema::to_json(bean)))
                .collect::<Vec<_>>()
                .into(),
        )
    }
}
