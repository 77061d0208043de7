//! [`BeanSchema`] and [`DataBean`] — whole-record decode, encode and diff.
//!
//! A schema implementation is written per record type, in the style of
//! generated code: evaluate every field, collect all failures through an
//! [`ObjViolation`], and construct the record only when no field failed.
//! One decode pass surfaces every violation, not just the first.

use databean_json::JsonObject;

use crate::diff::DataDiff;
use crate::violation::{ObjViolation, Violation};

/// Per-record-type schema: the aggregate of the record's schema fields.
pub trait BeanSchema {
    type Bean: DataBean;

    /// The record type name, used in aggregate violation constraints and
    /// registry identities.
    fn name() -> &'static str;

    /// Decode a raw object into the record, aggregating every field
    /// failure into one violation named `SCHEMA::<name>`.
    fn from_json(obj: &JsonObject) -> Result<Self::Bean, Violation>;

    /// Encode the record in field-declaration order; null fields are stored
    /// as explicit nulls.
    fn to_json(bean: &Self::Bean) -> JsonObject;

    /// Field-by-field diff of two records of this shape.
    fn diff(from: &Self::Bean, to: &Self::Bean) -> DataDiff<Self::Bean>;
}

/// A statically-shaped record with an associated schema.
pub trait DataBean: Clone + PartialEq + std::fmt::Debug + Sized + 'static {
    type Schema: BeanSchema<Bean = Self>;

    fn to_json(&self) -> JsonObject {
        Self::Schema::to_json(self)
    }

    fn from_json(obj: &JsonObject) -> Result<Self, Violation> {
        Self::Schema::from_json(obj)
    }

    /// Diff-and-merge two records of the same type. For each field, if the
    /// `from` value is present and differs, the merged record keeps it and
    /// the delta records the `to` side; otherwise the merged record takes
    /// the `to` value.
    fn diff_merge(from: &Self, to: &Self) -> DataDiff<Self> {
        Self::Schema::diff(from, to)
    }
}

/// Fresh aggregate builder for one decode pass of schema `S`.
pub fn new_violation<S: BeanSchema>() -> ObjViolation {
    ObjViolation::new(format!("SCHEMA::{}", S::name()))
}

/// Typed-decode convenience on raw objects.
pub trait ToBean {
    fn to_bean<D: DataBean>(&self) -> Result<D, Violation>;
}

impl ToBean for JsonObject {
    fn to_bean<D: DataBean>(&self) -> Result<D, Violation> {
        D::Schema::from_json(self)
    }
}
