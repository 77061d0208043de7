mod common;

use common::*;
use databean::{DataBean, ToBean, Value};

#[test]
fn diff_of_identical_records_is_empty_and_idempotent() {
    let person: Person = person_js().to_bean().unwrap();
    let diffed = Person::diff_merge(&person, &person);

    assert!(diffed.delta.is_empty());
    assert_eq!(diffed.merged, person);
}

#[test]
fn changed_field_lands_in_delta_while_merged_keeps_from() {
    let from = Address {
        city: Some("Dhaka".into()),
        road_list: Some(vec!["A".into(), "B".into()]),
    };
    let to = Address {
        city: Some("Chittagong".into()),
        road_list: Some(vec!["A".into(), "B".into()]),
    };

    let diffed = Address::diff_merge(&from, &to);

    assert_eq!(diffed.delta.len(), 1);
    assert_eq!(
        diffed.delta.get_string("city").unwrap().unwrap(),
        "Chittagong"
    );
    // The merged record resolves the conflict in favor of the from side
    // and takes the unchanged to-side list.
    assert_eq!(diffed.merged, from);
}

#[test]
fn removed_field_reports_explicit_null() {
    let from = Address {
        city: Some("Dhaka".into()),
        road_list: Some(vec!["A".into()]),
    };
    let to = Address {
        city: None,
        road_list: Some(vec!["A".into()]),
    };

    let diffed = Address::diff_merge(&from, &to);
    assert_eq!(diffed.delta.get("city"), Some(&Value::Null));
    assert_eq!(diffed.merged.city.as_deref(), Some("Dhaka"));
}

#[test]
fn absent_from_side_takes_to_without_reporting() {
    let from = Address {
        city: None,
        road_list: None,
    };
    let to = Address {
        city: Some("Sylhet".into()),
        road_list: None,
    };

    let diffed = Address::diff_merge(&from, &to);
    assert!(diffed.delta.is_empty());
    assert_eq!(diffed.merged.city.as_deref(), Some("Sylhet"));
}

#[test]
fn list_fields_diff_atomically() {
    let from = Address {
        city: Some("Dhaka".into()),
        road_list: Some(vec!["A".into(), "B".into()]),
    };
    let to = Address {
        city: Some("Dhaka".into()),
        road_list: Some(vec!["A".into(), "C".into()]),
    };

    let diffed = Address::diff_merge(&from, &to);
    // The whole to-side list is the reported change.
    let reported = diffed.delta.get_array("road_list").unwrap().unwrap();
    assert_eq!(reported.get_string(1).unwrap().unwrap(), "C");
    assert_eq!(
        diffed.merged.road_list,
        Some(vec!["A".to_string(), "B".to_string()])
    );
}

#[test]
fn nested_bean_diff_reports_a_sparse_delta() {
    let mut from: Person = person_js().to_bean().unwrap();
    let mut to = from.clone();
    from.employer.as_mut().unwrap().age = Some(54);
    to.employer.as_mut().unwrap().age = Some(55);

    let diffed = Person::diff_merge(&from, &to);

    // Only the changed nested field appears, shaped as a field path,
    // not the whole employer object.
    assert_eq!(diffed.delta.len(), 1);
    let employer_delta = diffed.delta.get_object("employer").unwrap().unwrap();
    assert_eq!(employer_delta.len(), 1);
    assert_eq!(employer_delta.get_i32("age").unwrap(), Some(55));

    // Merged keeps the from-side value at the conflict point.
    assert_eq!(diffed.merged.employer.unwrap().age, Some(54));
}

#[test]
fn removed_nested_bean_reports_null() {
    let from: Person = person_js().to_bean().unwrap();
    let mut to = from.clone();
    to.employer = None;

    let diffed = Person::diff_merge(&from, &to);
    assert_eq!(diffed.delta.get("employer"), Some(&Value::Null));
    assert_eq!(diffed.merged.employer, from.employer);
}

#[test]
fn raw_object_field_diffs_per_key() {
    let mut from = Employee {
        id: Some(1),
        meta: Some(ticked("{ `badge`: `B-12`, `floor`: 4 }")),
        ..Employee::default()
    };
    from.gender = Some(Gender::Male);
    let mut to = from.clone();
    to.meta = Some(ticked("{ `badge`: `B-12`, `floor`: 5 }"));

    let diffed = Employee::diff_merge(&from, &to);

    // Unlike lists, a raw object reports only the keys that changed.
    let meta_delta = diffed.delta.get_object("meta").unwrap().unwrap();
    assert_eq!(meta_delta.len(), 1);
    assert_eq!(meta_delta.get_i32("floor").unwrap(), Some(5));

    let merged_meta = diffed.merged.meta.unwrap();
    assert_eq!(merged_meta.get_i32("floor").unwrap(), Some(4));
    assert_eq!(merged_meta.get_string("badge").unwrap().unwrap(), "B-12");
}

#[test]
fn unchanged_nested_bean_stays_out_of_the_delta() {
    let from: Person = person_js().to_bean().unwrap();
    let mut to = from.clone();
    to.age = Some(49);

    let diffed = Person::diff_merge(&from, &to);
    assert_eq!(diffed.delta.len(), 1);
    assert_eq!(diffed.delta.get_i32("age").unwrap(), Some(49));
    assert!(!diffed.delta.contains_key("employer"));
    assert!(!diffed.delta.contains_key("address_list"));
}
