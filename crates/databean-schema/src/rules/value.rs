//! Value-bound rules: equality, set membership and ordering bounds.
//!
//! The violation context always carries the offending bound(s) so an API
//! client can render the constraint without extra lookups.

use databean_json::Value;

use crate::validator::Validator;
use crate::violation::{logical, Violation};

/// The identity rule: accepts everything. Useful as the rule argument when
/// a constraint only asserts presence.
pub fn pass<T>() -> impl Validator<T> + Copy + Send + Sync {
    |_: &T| -> Result<(), Violation> { Ok(()) }
}

pub fn equal<T>(expected: T) -> impl Validator<T> + Send + Sync
where
    T: PartialEq + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value == expected {
            Ok(())
        } else {
            Err(logical::equal_bound(expected.clone()))
        }
    }
}

pub fn in_set<T>(allowed: Vec<T>) -> impl Validator<T> + Send + Sync
where
    T: PartialEq + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if allowed.contains(value) {
            Ok(())
        } else {
            Err(logical::set_bound(
                allowed.iter().cloned().map(Into::into).collect(),
            ))
        }
    }
}

/// Value must not exceed the bound.
pub fn max<T>(bound: T) -> impl Validator<T> + Send + Sync
where
    T: PartialOrd + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value <= bound {
            Ok(())
        } else {
            Err(logical::max_bound(bound.clone()))
        }
    }
}

/// Value must reach the bound.
pub fn min<T>(bound: T) -> impl Validator<T> + Send + Sync
where
    T: PartialOrd + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value >= bound {
            Ok(())
        } else {
            Err(logical::min_bound(bound.clone()))
        }
    }
}

/// Strictly below the bound.
pub fn less_than<T>(bound: T) -> impl Validator<T> + Send + Sync
where
    T: PartialOrd + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value < bound {
            Ok(())
        } else {
            Err(logical::less_than_bound(bound.clone()))
        }
    }
}

/// Strictly above the bound.
pub fn greater_than<T>(bound: T) -> impl Validator<T> + Send + Sync
where
    T: PartialOrd + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value > bound {
            Ok(())
        } else {
            Err(logical::greater_than_bound(bound.clone()))
        }
    }
}

/// Both cardinals inclusive: `left <= value <= right`.
pub fn range_open<T>(left: T, right: T) -> impl Validator<T> + Send + Sync
where
    T: PartialOrd + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value >= left && *value <= right {
            Ok(())
        } else {
            Err(logical::range_bound("RANGE_OPEN", left.clone(), right.clone()))
        }
    }
}

/// Left inclusive, right exclusive: `left <= value < right`.
pub fn range_open_close<T>(left: T, right: T) -> impl Validator<T> + Send + Sync
where
    T: PartialOrd + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value >= left && *value < right {
            Ok(())
        } else {
            Err(logical::range_bound(
                "RANGE_OPEN_CLOSE",
                left.clone(),
                right.clone(),
            ))
        }
    }
}

/// Left exclusive, right inclusive: `left < value <= right`.
pub fn range_close_open<T>(left: T, right: T) -> impl Validator<T> + Send + Sync
where
    T: PartialOrd + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value > left && *value <= right {
            Ok(())
        } else {
            Err(logical::range_bound(
                "RANGE_CLOSE_OPEN",
                left.clone(),
                right.clone(),
            ))
        }
    }
}

/// Both cardinals exclusive: `left < value < right`.
pub fn range_close<T>(left: T, right: T) -> impl Validator<T> + Send + Sync
where
    T: PartialOrd + Clone + Into<Value> + Send + Sync + 'static,
{
    move |value: &T| {
        if *value > left && *value < right {
            Ok(())
        } else {
            Err(logical::range_bound(
                "RANGE_CLOSE",
                left.clone(),
                right.clone(),
            ))
        }
    }
}
