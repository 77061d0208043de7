//! Enum fields: decoded from the exact member name, case-sensitive.

use std::marker::PhantomData;

use databean_json::Value;

use super::sealed::Sealed;
use super::TypeResolver;
use crate::violation::{types, Violation};

/// An enum whose members travel as their declared names.
///
/// Implemented by application enum types; the member name is used verbatim
/// on the wire (case-sensitive, no transformation).
pub trait NamedEnum: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Type name shown in enum-domain violations.
    const TYPE_NAME: &'static str;

    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    fn name(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::MEMBERS.iter().copied().find(|m| m.name() == name)
    }

    fn to_value(&self) -> Value {
        Value::Enum(self.name().to_owned())
    }
}

/// Resolver for [`NamedEnum`] fields.
pub struct EnumResolver<E>(PhantomData<E>);

impl<E> EnumResolver<E> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Clone for EnumResolver<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumResolver<E> {}

impl<E> Default for EnumResolver<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Sealed for EnumResolver<E> {}

impl<E: NamedEnum> TypeResolver<E> for EnumResolver<E> {
    fn decode(&self, value: &Value) -> Result<E, Violation> {
        match value.as_str() {
            Some(name) => E::from_name(name).ok_or_else(types::enum_type::<E>),
            None => Err(types::enum_type::<E>()),
        }
    }

    fn encode(&self, value: &E) -> Value {
        value.to_value()
    }
}
