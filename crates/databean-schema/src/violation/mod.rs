//! Structured validation failures.
//!
//! A [`Violation`] names the violated constraint and carries either a
//! single opaque context value (a leaf failure such as "expected Integer")
//! or an object context mapping field names to nested violations (an
//! aggregate of several failures under one parent). Violations are plain
//! serializable values, not error strings: `to_json()` yields a tree fit
//! for direct inclusion in an API error response.

pub mod logical;
pub mod types;

use databean_json::{JsonObject, Value};

/// A validation failure: a constraint name plus optional context.
///
/// Immutable once returned. A `Value::Object` context marks an aggregate
/// ("variable" context, one entry per failed field); any other non-null
/// context is a single leaf context.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub constraint: String,
    ctx: Value,
}

impl Violation {
    /// A violation with no context data.
    pub fn new(constraint: impl Into<String>) -> Self {
        Self {
            constraint: constraint.into(),
            ctx: Value::Null,
        }
    }

    /// A violation carrying context data.
    pub fn with_ctx(constraint: impl Into<String>, ctx: impl Into<Value>) -> Self {
        Self {
            constraint: constraint.into(),
            ctx: ctx.into(),
        }
    }

    pub fn has_single_ctx(&self) -> bool {
        !self.has_var_ctx()
    }

    pub fn has_var_ctx(&self) -> bool {
        matches!(self.ctx, Value::Object(_))
    }

    /// The single context value; `None` when this is an aggregate.
    pub fn single_ctx(&self) -> Option<&Value> {
        match &self.ctx {
            Value::Object(_) => None,
            ctx => Some(ctx),
        }
    }

    /// An independent copy of the aggregate context; `None` for a leaf.
    pub fn var_ctx(&self) -> Option<JsonObject> {
        match &self.ctx {
            Value::Object(obj) => Some(obj.copy()),
            _ => None,
        }
    }

    pub fn to_json(&self) -> JsonObject {
        let mut js = JsonObject::new();
        js.put("constraint", self.constraint.as_str())
            .put("ctx", self.ctx.clone());
        js
    }
}

impl From<Violation> for Value {
    fn from(violation: Violation) -> Value {
        Value::Object(violation.to_json())
    }
}

/// Aggregation builder used *during* one decode/validate pass.
///
/// Collects per-field failures under their field names; once the pass is
/// over, [`into_violation`](ObjViolation::into_violation) freezes it into
/// an aggregate [`Violation`].
#[derive(Debug)]
pub struct ObjViolation {
    constraint: String,
    ctx: JsonObject,
}

impl ObjViolation {
    pub fn new(constraint: impl Into<String>) -> Self {
        Self {
            constraint: constraint.into(),
            ctx: JsonObject::new(),
        }
    }

    /// Record the outcome of one field. A failure is filed under the field
    /// name and `None` is returned; a success passes its value through.
    pub fn check<T>(
        &mut self,
        name: &str,
        outcome: Result<Option<T>, Violation>,
    ) -> Option<Option<T>> {
        match outcome {
            Ok(value) => Some(value),
            Err(violation) => {
                self.ctx.put(name, violation);
                None
            }
        }
    }

    /// File a failure directly under a field name.
    pub fn fault(&mut self, name: &str, violation: Violation) {
        self.ctx.put(name, violation);
    }

    /// Whether any field failed so far.
    pub fn has_requirement(&self) -> bool {
        !self.ctx.is_empty()
    }

    pub fn into_violation(self) -> Violation {
        Violation::with_ctx(self.constraint, Value::Object(self.ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_flat_ctx_violation() {
        let violation = Violation::with_ctx("ELIGIBLE_AGE", 24);
        assert!(violation.has_single_ctx());
        assert_eq!(violation.single_ctx(), Some(&Value::Int(24)));
        assert_eq!(violation.var_ctx(), None);
    }

    #[test]
    fn var_ctx_violation_copies_its_context() {
        let mut js = JsonObject::new();
        js.put("gender", "female").put("age", 45);
        let violation = Violation::with_ctx("PENSION_ELIGIBLE", js.copy());

        assert!(!violation.has_single_ctx());
        assert!(violation.has_var_ctx());

        let mut ctx = violation.var_ctx().unwrap();
        assert_eq!(ctx, js);
        // The copy is independent of the violation's own context.
        ctx.put("age", 46);
        assert_eq!(violation.var_ctx().unwrap(), js);
    }

    #[test]
    fn obj_violation_aggregates_failures_by_field() {
        let mut agg = ObjViolation::new("SCHEMA::Person");
        let ok: Option<Option<i32>> = agg.check("id", Ok(Some(7)));
        assert_eq!(ok, Some(Some(7)));
        assert!(!agg.has_requirement());

        let missing: Option<Option<i32>> = agg.check("age", Err(logical::not_null()));
        assert_eq!(missing, None);
        assert!(agg.has_requirement());

        let violation = agg.into_violation();
        assert_eq!(violation.constraint, "SCHEMA::Person");
        let ctx = violation.var_ctx().unwrap();
        assert_eq!(ctx.len(), 1);
        let age = ctx.get_object("age").unwrap().unwrap();
        assert_eq!(age.get_string("constraint").unwrap().unwrap(), "NOT_NULL");
    }

    #[test]
    fn to_json_is_a_serializable_tree() {
        let violation = Violation::with_ctx("DATA_TYPE", "Integer");
        let js = violation.to_json();
        assert_eq!(js.get_string("constraint").unwrap().unwrap(), "DATA_TYPE");
        assert_eq!(js.get_string("ctx").unwrap().unwrap(), "Integer");
        // Round-trips through the codec.
        let back: JsonObject = js.encode().parse().unwrap();
        assert_eq!(back, js);
    }
}
