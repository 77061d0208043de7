//! The type-resolver family: per-field-shape decode/encode/diff strategies.
//!
//! The set is closed: one zero-sized resolver per supported field shape,
//! sealed against outside implementations and dispatched statically.
//!
//! | Resolver              | Field shape                         | Diff granularity |
//! |-----------------------|-------------------------------------|------------------|
//! | [`LiteralResolver`]   | scalar literal (int, text, instant…)| atomic           |
//! | [`EnumResolver`]      | enum member name                    | atomic           |
//! | [`BeanResolver`]      | nested bean                         | nested delta     |
//! | [`PlainListResolver`] | homogeneous literal list            | atomic           |
//! | [`BeanListResolver`]  | homogeneous bean list               | atomic           |
//! | [`JsonObjectResolver`]| raw object passthrough              | per-key delta    |
//! | [`JsonArrayResolver`] | raw array passthrough               | atomic           |

pub mod bean;
pub mod enums;
pub mod list;
pub mod literal;
pub mod tree;

use databean_json::Value;

use crate::violation::Violation;

pub use bean::BeanResolver;
pub use enums::{EnumResolver, NamedEnum};
pub use list::{BeanListResolver, PlainListResolver};
pub use literal::{Literal, LiteralResolver};
pub use tree::{JsonArrayResolver, JsonObjectResolver};

pub(crate) mod sealed {
    /// Closes the resolver set and the literal type set.
    pub trait Sealed {}
}

/// Decode/encode/diff strategy for one field value shape.
///
/// `decode` validates the wire value and produces the rich field value, or
/// a single descriptive [`Violation`], never an aggregate; aggregation
/// happens one level up, at the field. `encode` is total: it operates on
/// already-valid in-memory values. `diff` compares two field values,
/// reporting a changed representation through the callback and resolving
/// the conflict in favor of the `from` side (the returned value becomes the
/// merged field).
pub trait TypeResolver<T: Clone + PartialEq>: sealed::Sealed + Copy {
    fn decode(&self, value: &Value) -> Result<T, Violation>;

    fn encode(&self, value: &T) -> Value;

    /// Default atomic diff: equal (or absent `from`) returns `to`
    /// unreported; otherwise the encoded `to` side is reported and `from`
    /// is kept as the merged value.
    fn diff(
        &self,
        from: Option<T>,
        to: Option<T>,
        report: &mut dyn FnMut(Value),
    ) -> Option<T> {
        if from.is_none() || from == to {
            return to;
        }
        let changed = match &to {
            Some(value) => self.encode(value),
            None => Value::Null,
        };
        report(changed);
        from
    }
}
