//! Explicit schema registry.
//!
//! Populated once at process start by registration calls (or generated
//! startup code), then read-only; the built registry is safe to share
//! across threads. Lookups fail fast: a missing schema or a double
//! registration is a typed error, never a silent default.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use databean_json::JsonObject;
use thiserror::Error;

use crate::schema::{BeanSchema, DataBean};
use crate::violation::Violation;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no schema registered for `{0}`")]
    Missing(String),
    #[error("schema `{0}` registered more than once")]
    Duplicate(&'static str),
}

/// Type-erased registry entry for one record type.
#[derive(Debug)]
pub struct SchemaHandle {
    name: &'static str,
    check: fn(&JsonObject) -> Result<(), Violation>,
}

impl SchemaHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run a full schema decode of the payload, discarding the record and
    /// keeping only the validation outcome.
    pub fn check(&self, obj: &JsonObject) -> Result<(), Violation> {
        (self.check)(obj)
    }
}

fn check_entry<D: DataBean>(obj: &JsonObject) -> Result<(), Violation> {
    D::Schema::from_json(obj).map(|_| ())
}

#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    by_name: HashMap<&'static str, SchemaHandle>,
    ids: HashSet<TypeId>,
}

impl SchemaRegistryBuilder {
    /// Register the schema of `D`. Fails when the type identity or the
    /// schema name is already claimed.
    pub fn register<D: DataBean>(&mut self) -> Result<&mut Self, RegistryError> {
        let name = D::Schema::name();
        if !self.ids.insert(TypeId::of::<D>()) || self.by_name.contains_key(name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.by_name.insert(
            name,
            SchemaHandle {
                name,
                check: check_entry::<D>,
            },
        );
        Ok(self)
    }

    pub fn build(self) -> SchemaRegistry {
        SchemaRegistry {
            by_name: self.by_name,
            ids: self.ids,
        }
    }
}

/// Immutable name → schema mapping built once at startup.
pub struct SchemaRegistry {
    by_name: HashMap<&'static str, SchemaHandle>,
    ids: HashSet<TypeId>,
}

impl SchemaRegistry {
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    pub fn lookup(&self, name: &str) -> Result<&SchemaHandle, RegistryError> {
        self.by_name
            .get(name)
            .ok_or_else(|| RegistryError::Missing(name.to_owned()))
    }

    pub fn contains<D: DataBean>(&self) -> bool {
        self.ids.contains(&TypeId::of::<D>())
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
