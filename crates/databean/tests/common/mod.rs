#![allow(dead_code)]

//! Example beans with hand-written schemas, standing in for generated
//! code, plus the JSON samples the behavior tests run against.

use chrono::{DateTime, Utc};
use databean::{
    bean_field, bean_list_field, enum_field, json_object_field, new_violation, plain_field,
    plain_list_field, BeanListResolver, BeanResolver, BeanSchema, DataBean, DataDiff,
    EnumResolver, JsonArray, JsonObject, JsonObjectResolver, LiteralResolver, NamedEnum,
    PlainListResolver, SchemaField, Value, Violation,
};

/// Backtick-for-quote JSON literals keep the samples readable.
pub fn ticked(text: &str) -> JsonObject {
    text.replace('`', "\"").parse().unwrap()
}

pub fn ticked_arr(text: &str) -> JsonArray {
    text.replace('`', "\"").parse().unwrap()
}

// ── Gender ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl NamedEnum for Gender {
    const TYPE_NAME: &'static str = "Gender";
    const MEMBERS: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Unknown];

    fn name(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }
}

impl From<Gender> for Value {
    fn from(gender: Gender) -> Value {
        gender.to_value()
    }
}

// ── Address ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub city: Option<String>,
    pub road_list: Option<Vec<String>>,
}

pub struct AddressSchema;

impl AddressSchema {
    pub const CITY: SchemaField<Address, String, LiteralResolver<String>> =
        plain_field("city", |b: &Address| b.city.as_ref(), true);
    pub const ROAD_LIST: SchemaField<Address, Vec<String>, PlainListResolver<String>> =
        plain_list_field("road_list", |b: &Address| b.road_list.as_ref(), false);
}

impl BeanSchema for AddressSchema {
    type Bean = Address;

    fn name() -> &'static str {
        "Address"
    }

    fn from_json(data: &JsonObject) -> Result<Address, Violation> {
        let city = Self::CITY.from_json(data);
        let road_list = Self::ROAD_LIST.from_json(data);

        let mut violation = new_violation::<Self>();
        let city = violation.check(Self::CITY.name, city);
        let road_list = violation.check(Self::ROAD_LIST.name, road_list);
        if violation.has_requirement() {
            return Err(violation.into_violation());
        }
        Ok(Address {
            city: city.flatten(),
            road_list: road_list.flatten(),
        })
    }

    fn to_json(bean: &Address) -> JsonObject {
        let mut js = JsonObject::new();
        js.put(Self::CITY.name, Self::CITY.to_json(bean));
        js.put(Self::ROAD_LIST.name, Self::ROAD_LIST.to_json(bean));
        js
    }

    fn diff(from: &Address, to: &Address) -> DataDiff<Address> {
        let mut delta = JsonObject::new();
        let merged = Address {
            city: Self::CITY.diff(from, to, &mut delta),
            road_list: Self::ROAD_LIST.diff(from, to, &mut delta),
        };
        DataDiff::new(delta, merged)
    }
}

impl DataBean for Address {
    type Schema = AddressSchema;
}

// ── Person ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Person {
    pub id: Option<i64>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub employer: Option<Box<Person>>,
    pub address_list: Option<Vec<Address>>,
}

pub struct PersonSchema;

impl PersonSchema {
    pub const ID: SchemaField<Person, i64, LiteralResolver<i64>> =
        plain_field("id", |b: &Person| b.id.as_ref(), true);
    pub const AGE: SchemaField<Person, i32, LiteralResolver<i32>> =
        plain_field("age", |b: &Person| b.age.as_ref(), true);
    pub const GENDER: SchemaField<Person, Gender, EnumResolver<Gender>> =
        enum_field("gender", |b: &Person| b.gender.as_ref(), true);
    pub const EMPLOYER: SchemaField<Person, Person, BeanResolver<Person>> =
        bean_field("employer", |b: &Person| b.employer.as_deref(), false);
    pub const ADDRESS_LIST: SchemaField<Person, Vec<Address>, BeanListResolver<Address>> =
        bean_list_field("address_list", |b: &Person| b.address_list.as_ref(), false);
}

impl BeanSchema for PersonSchema {
    type Bean = Person;

    fn name() -> &'static str {
        "Person"
    }

    fn from_json(data: &JsonObject) -> Result<Person, Violation> {
        let gender = Self::GENDER.from_json(data);
        let address_list = Self::ADDRESS_LIST.from_json(data);
        let employer = Self::EMPLOYER.from_json(data);
        let id = Self::ID.from_json(data);
        let age = Self::AGE.from_json(data);

        let mut violation = new_violation::<Self>();
        let gender = violation.check(Self::GENDER.name, gender);
        let address_list = violation.check(Self::ADDRESS_LIST.name, address_list);
        let employer = violation.check(Self::EMPLOYER.name, employer);
        let id = violation.check(Self::ID.name, id);
        let age = violation.check(Self::AGE.name, age);
        if violation.has_requirement() {
            return Err(violation.into_violation());
        }
        Ok(Person {
            gender: gender.flatten(),
            address_list: address_list.flatten(),
            employer: employer.flatten().map(Box::new),
            id: id.flatten(),
            age: age.flatten(),
        })
    }

    fn to_json(bean: &Person) -> JsonObject {
        let mut js = JsonObject::new();
        js.put(Self::GENDER.name, Self::GENDER.to_json(bean));
        js.put(Self::ADDRESS_LIST.name, Self::ADDRESS_LIST.to_json(bean));
        js.put(Self::EMPLOYER.name, Self::EMPLOYER.to_json(bean));
        js.put(Self::ID.name, Self::ID.to_json(bean));
        js.put(Self::AGE.name, Self::AGE.to_json(bean));
        js
    }

    fn diff(from: &Person, to: &Person) -> DataDiff<Person> {
        let mut delta = JsonObject::new();
        let merged = Person {
            gender: Self::GENDER.diff(from, to, &mut delta),
            address_list: Self::ADDRESS_LIST.diff(from, to, &mut delta),
            employer: Self::EMPLOYER.diff(from, to, &mut delta).map(Box::new),
            id: Self::ID.diff(from, to, &mut delta),
            age: Self::AGE.diff(from, to, &mut delta),
        };
        DataDiff::new(delta, merged)
    }
}

impl DataBean for Person {
    type Schema = PersonSchema;
}

// ── Employee ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Employee {
    pub id: Option<i64>,
    pub gender: Option<Gender>,
    pub salary: Option<i32>,
    pub joined_at: Option<DateTime<Utc>>,
    pub avatar: Option<Vec<u8>>,
    pub home: Option<Address>,
    pub meta: Option<JsonObject>,
}

pub struct EmployeeSchema;

impl EmployeeSchema {
    pub const ID: SchemaField<Employee, i64, LiteralResolver<i64>> =
        plain_field("id", |b: &Employee| b.id.as_ref(), true);
    pub const GENDER: SchemaField<Employee, Gender, EnumResolver<Gender>> =
        enum_field("gender", |b: &Employee| b.gender.as_ref(), false);
    pub const SALARY: SchemaField<Employee, i32, LiteralResolver<i32>> =
        plain_field("salary", |b: &Employee| b.salary.as_ref(), false);
    pub const JOINED_AT: SchemaField<Employee, DateTime<Utc>, LiteralResolver<DateTime<Utc>>> =
        plain_field("joined_at", |b: &Employee| b.joined_at.as_ref(), false);
    pub const AVATAR: SchemaField<Employee, Vec<u8>, LiteralResolver<Vec<u8>>> =
        plain_field("avatar", |b: &Employee| b.avatar.as_ref(), false);
    pub const HOME: SchemaField<Employee, Address, BeanResolver<Address>> =
        bean_field("home", |b: &Employee| b.home.as_ref(), false);
    pub const META: SchemaField<Employee, JsonObject, JsonObjectResolver> =
        json_object_field("meta", |b: &Employee| b.meta.as_ref(), false);
}

impl BeanSchema for EmployeeSchema {
    type Bean = Employee;

    fn name() -> &'static str {
        "Employee"
    }

    fn from_json(data: &JsonObject) -> Result<Employee, Violation> {
        let id = Self::ID.from_json(data);
        let gender = Self::GENDER.from_json(data);
        let salary = Self::SALARY.from_json(data);
        let joined_at = Self::JOINED_AT.from_json(data);
        let avatar = Self::AVATAR.from_json(data);
        let home = Self::HOME.from_json(data);
        let meta = Self::META.from_json(data);

        let mut violation = new_violation::<Self>();
        let id = violation.check(Self::ID.name, id);
        let gender = violation.check(Self::GENDER.name, gender);
        let salary = violation.check(Self::SALARY.name, salary);
        let joined_at = violation.check(Self::JOINED_AT.name, joined_at);
        let avatar = violation.check(Self::AVATAR.name, avatar);
        let home = violation.check(Self::HOME.name, home);
        let meta = violation.check(Self::META.name, meta);
        if violation.has_requirement() {
            return Err(violation.into_violation());
        }
        Ok(Employee {
            id: id.flatten(),
            gender: gender.flatten(),
            salary: salary.flatten(),
            joined_at: joined_at.flatten(),
            avatar: avatar.flatten(),
            home: home.flatten(),
            meta: meta.flatten(),
        })
    }

    fn to_json(bean: &Employee) -> JsonObject {
        let mut js = JsonObject::new();
        js.put(Self::ID.name, Self::ID.to_json(bean));
        js.put(Self::GENDER.name, Self::GENDER.to_json(bean));
        js.put(Self::SALARY.name, Self::SALARY.to_json(bean));
        js.put(Self::JOINED_AT.name, Self::JOINED_AT.to_json(bean));
        js.put(Self::AVATAR.name, Self::AVATAR.to_json(bean));
        js.put(Self::HOME.name, Self::HOME.to_json(bean));
        js.put(Self::META.name, Self::META.to_json(bean));
        js
    }

    fn diff(from: &Employee, to: &Employee) -> DataDiff<Employee> {
        let mut delta = JsonObject::new();
        let merged = Employee {
            id: Self::ID.diff(from, to, &mut delta),
            gender: Self::GENDER.diff(from, to, &mut delta),
            salary: Self::SALARY.diff(from, to, &mut delta),
            joined_at: Self::JOINED_AT.diff(from, to, &mut delta),
            avatar: Self::AVATAR.diff(from, to, &mut delta),
            home: Self::HOME.diff(from, to, &mut delta),
            meta: Self::META.diff(from, to, &mut delta),
        };
        DataDiff::new(delta, merged)
    }
}

impl DataBean for Employee {
    type Schema = EmployeeSchema;
}

// ── Samples ───────────────────────────────────────────────────────────────

pub fn address_arr() -> JsonArray {
    ticked_arr(
        "[ \
           { `city`: `Dhaka`, `road_list`: [`Mirpur 10`, `Gulshan`] }, \
           { `city`: `Narayanganj`, `road_list`: [`Kachpur`, `Badlapur`] } \
         ]",
    )
}

pub fn invalid_address_arr() -> JsonArray {
    ticked_arr(
        "[ \
           { `city`: `Dhaka`, `road_list`: [`Mirpur 10`, `Gulshan`] }, \
           { `city`: 123, `road_list`: [`Kachpur`, `Badlapur`] }, \
           { `city`: `Barishal`, `road_list`: [`Kachpur`, `Badlapur`] } \
         ]",
    )
}

pub fn an_address_js() -> JsonObject {
    address_arr().get_object(0).unwrap().unwrap().copy()
}

pub fn person_js() -> JsonObject {
    let mut js = JsonObject::new();
    js.put("id", "1234L")
        .put("age", 48)
        .put("gender", "male")
        .put(
            "employer",
            ticked("{ `id`: `234L`, `age`: 54, `gender`: `female` }"),
        )
        .put("address_list", address_arr());
    js
}

pub fn person_missing_age_and_gender() -> JsonObject {
    let mut js = JsonObject::new();
    js.put("id", "1234L").put("address_list", address_arr());
    js
}

pub fn invalid_person_age_type() -> JsonObject {
    let mut js = JsonObject::new();
    js.put("id", 1234)
        .put("age", "56")
        .put("gender", "blah_blah")
        .put("address_list", address_arr());
    js
}

pub fn missing_person_id() -> JsonObject {
    let mut js = JsonObject::new();
    js.put("age", "56")
        .put("gender", "blah_blah")
        .put("address_list", address_arr());
    js
}
