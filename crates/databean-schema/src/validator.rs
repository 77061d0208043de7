//! Business-rule validation over already-decoded beans.
//!
//! A [`BeanValidator`] binds per-field constraints (required or optional,
//! each composable with further rules) under one constraint name. It
//! evaluates every configured constraint against the live field value and
//! aggregates failures exactly like schema decode does, nested by field
//! name. Validation never mutates the bean.

use databean_json::JsonObject;

use crate::field::SchemaField;
use crate::resolver::TypeResolver;
use crate::schema::{BeanSchema, DataBean};
use crate::violation::{logical, ObjViolation, Violation};

/// A single business rule over a field value.
pub trait Validator<T> {
    fn validate(&self, value: &T) -> Result<(), Violation>;

    /// Both rules must pass; the first failure wins.
    fn and<V: Validator<T>>(self, other: V) -> And<Self, V>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Passes when either rule passes; the second failure is reported.
    fn or<V: Validator<T>>(self, other: V) -> Or<Self, V>
    where
        Self: Sized,
    {
        Or(self, other)
    }
}

impl<T, F> Validator<T> for F
where
    F: Fn(&T) -> Result<(), Violation>,
{
    fn validate(&self, value: &T) -> Result<(), Violation> {
        self(value)
    }
}

pub struct And<A, B>(A, B);

impl<T, A: Validator<T>, B: Validator<T>> Validator<T> for And<A, B> {
    fn validate(&self, value: &T) -> Result<(), Violation> {
        self.0.validate(value)?;
        self.1.validate(value)
    }
}

pub struct Or<A, B>(A, B);

impl<T, A: Validator<T>, B: Validator<T>> Validator<T> for Or<A, B> {
    fn validate(&self, value: &T) -> Result<(), Violation> {
        match self.0.validate(value) {
            Ok(()) => Ok(()),
            Err(_) => self.1.validate(value),
        }
    }
}

type Check<D> = Box<dyn Fn(&D, &mut ObjViolation) + Send + Sync>;

/// A named set of per-field business constraints for beans of type `D`.
pub struct BeanValidator<D: DataBean> {
    pub constraint_name: String,
    checks: Vec<Check<D>>,
}

impl<D: DataBean> BeanValidator<D> {
    /// Build a validator through a configuration closure:
    ///
    /// ```ignore
    /// let pension = BeanValidator::create("FEMALE_PENSION_ELIGIBLE", |v| {
    ///     v.required(PersonSchema::AGE, greater_than(50));
    ///     v.required(PersonSchema::GENDER, equal(Gender::Female));
    /// });
    /// ```
    pub fn create(constraint_name: impl Into<String>, config: impl FnOnce(&mut Self)) -> Self {
        let mut validator = Self {
            constraint_name: constraint_name.into(),
            checks: Vec::new(),
        };
        config(&mut validator);
        validator
    }

    /// Constrain a field that must be present; the rule runs on its value.
    pub fn required<T, R, V>(&mut self, field: SchemaField<D, T, R>, rule: V) -> &mut Self
    where
        T: Clone + PartialEq + 'static,
        R: TypeResolver<T> + Send + Sync + 'static,
        V: Validator<T> + Send + Sync + 'static,
    {
        self.constrain(field, true, rule)
    }

    /// Constrain a field that may be null; null passes through untouched.
    pub fn optional<T, R, V>(&mut self, field: SchemaField<D, T, R>, rule: V) -> &mut Self
    where
        T: Clone + PartialEq + 'static,
        R: TypeResolver<T> + Send + Sync + 'static,
        V: Validator<T> + Send + Sync + 'static,
    {
        self.constrain(field, false, rule)
    }

    fn constrain<T, R, V>(
        &mut self,
        field: SchemaField<D, T, R>,
        required: bool,
        rule: V,
    ) -> &mut Self
    where
        T: Clone + PartialEq + 'static,
        R: TypeResolver<T> + Send + Sync + 'static,
        V: Validator<T> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(move |bean: &D, violation: &mut ObjViolation| {
            let outcome = match (field.accessor)(bean) {
                None => {
                    if required {
                        Err(logical::not_null())
                    } else {
                        Ok(())
                    }
                }
                Some(value) => rule.validate(value),
            };
            if let Err(fault) = outcome {
                violation.fault(field.name, fault);
            }
        }));
        self
    }

    /// Evaluate every constraint; all failures are reported in one pass,
    /// aggregated under this validator's constraint name.
    pub fn validate(&self, bean: &D) -> Result<(), Violation> {
        let mut violation = ObjViolation::new(self.constraint_name.clone());
        for check in &self.checks {
            check(bean, &mut violation);
        }
        if violation.has_requirement() {
            Err(violation.into_violation())
        } else {
            Ok(())
        }
    }

    /// Decode first, then validate: schema failures short-circuit before
    /// any business rule runs.
    pub fn validate_json(&self, obj: &JsonObject) -> Result<D, Violation> {
        let bean = D::Schema::from_json(obj)?;
        self.validate(&bean)?;
        Ok(bean)
    }
}
