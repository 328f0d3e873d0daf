// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{CASE_CONFIG, FIELD_LIST_CONFIG};
use crate::config::Settings;
use crate::data::{Schema, SchemaBuilder, Struct, Value};
use crate::errors::ConfigError;
use crate::record::{Record, RecordDocument};
use crate::traits::Transformation;
use crate::transform::{ChangeCase, Side};
use serde_json::json;
use std::sync::Arc;

fn info_schema() -> Arc<Schema> {
    SchemaBuilder::struct_()
        .field("Lower", Schema::optional_string())
        .unwrap()
        .field("Upper", Schema::optional_string())
        .unwrap()
        .into()
}

fn person_schema() -> Arc<Schema> {
    SchemaBuilder::struct_()
        .field("Firstname", Schema::optional_string())
        .unwrap()
        .field("Lastname", Schema::optional_string())
        .unwrap()
        .field("Info", info_schema())
        .unwrap()
        .into()
}

fn person(first: &str, last: &str) -> Value {
    let schema = person_schema();
    let info_schema = schema.field("Info").unwrap().schema().clone();

    let mut info = Struct::new(info_schema).unwrap();
    info.put("Lower", "this is lower text")
        .unwrap()
        .put("Upper", "THIS IS UPPER TEXT")
        .unwrap();

    let mut person = Struct::new(schema).unwrap();
    person
        .put("Firstname", first)
        .unwrap()
        .put("Lastname", last)
        .unwrap()
        .put("Info", info)
        .unwrap();
    Value::Struct(person)
}

fn person_record(first: &str, last: &str) -> Record {
    let value = person(first, last);
    let schema = value.as_struct().unwrap().schema().clone();
    Record::new("people").with_value(Some(schema), Some(value))
}

fn uppercase_transform() -> ChangeCase {
    let mut transform = ChangeCase::value();
    transform
        .configure(
            &Settings::new()
                .with(FIELD_LIST_CONFIG, "Firstname,Lastname,Lower")
                .with(CASE_CONFIG, "Uppercase"),
        )
        .unwrap();
    transform
}

/// Top-level and nested selected fields change; everything else is untouched.
#[test]
fn test_uppercase_person_record() {
    let transform = uppercase_transform();
    let record = person_record("John", "Doe");

    let output = transform.apply(&record).unwrap();
    let value = output.value.as_ref().and_then(Value::as_struct).unwrap();
    let info = value.get_struct("Info").unwrap().unwrap();

    assert_eq!(value.get_str("Firstname").unwrap(), Some("JOHN"));
    assert_eq!(value.get_str("Lastname").unwrap(), Some("DOE"));
    assert_eq!(info.get_str("Lower").unwrap(), Some("THIS IS LOWER TEXT"));
    assert_eq!(info.get_str("Upper").unwrap(), Some("THIS IS UPPER TEXT"));

    assert_eq!(output.value_schema, record.value_schema);
    assert_eq!(record.value, Some(person("John", "Doe")));
}

#[test]
fn test_lowercase_from_yaml_sequence() {
    let mut transform = ChangeCase::value();
    let settings: Settings = [
        (FIELD_LIST_CONFIG, serde_yaml::Value::from(vec!["Upper"])),
        (CASE_CONFIG, serde_yaml::Value::from("Lowercase")),
    ]
    .into_iter()
    .collect();
    transform.configure(&settings).unwrap();

    let record = person_record("John", "Doe");
    let output = transform.apply(&record).unwrap();
    let value = output.value.as_ref().and_then(Value::as_struct).unwrap();
    let info = value.get_struct("Info").unwrap().unwrap();

    assert_eq!(info.get_str("Upper").unwrap(), Some("this is upper text"));
    assert_eq!(value.get_str("Firstname").unwrap(), Some("John"));
}

#[test]
fn test_configure_rejects_empty_case() {
    let mut transform = ChangeCase::value();
    let error = transform
        .configure(&Settings::new().with(CASE_CONFIG, ""))
        .unwrap_err();

    assert!(matches!(error, ConfigError::InvalidEnumValue { .. }));
    assert!(error.to_string().contains("Uppercase, Lowercase"));
}

#[test]
fn test_configure_rejects_numeric_case() {
    let mut transform = ChangeCase::key();
    let error = transform
        .configure(&Settings::new().with(CASE_CONFIG, 123))
        .unwrap_err();

    assert!(matches!(error, ConfigError::TypeMismatch { .. }));
    assert!(error.to_string().contains("Value must be a string."));
}

#[test]
fn test_applying_twice_matches_applying_once() {
    let transform = uppercase_transform();
    let record = person_record("John", "Doe");

    let once = transform.apply(&record).unwrap().into_owned();
    let twice = transform.apply(&once).unwrap().into_owned();
    assert_eq!(once, twice);
}

#[test]
fn test_json_document_round_trip_through_transform() {
    let document: RecordDocument = serde_json::from_value(json!({
        "topic": "people",
        "key": "john",
        "value_schema": {
            "type": "struct",
            "fields": [
                { "name": "Firstname", "schema": { "type": "string", "optional": true } },
                { "name": "Age", "schema": { "type": "int32", "optional": true } },
                { "name": "Lastname", "schema": { "type": "string", "optional": true } }
            ]
        },
        "value": { "Firstname": "John", "Age": 42, "Lastname": null }
    }))
    .unwrap();

    let record = Record::from_document(&document).unwrap();
    let output = uppercase_transform().apply(&record).unwrap().to_document();

    assert_eq!(output.key, Some(json!("john")));
    assert_eq!(output.value_schema, document.value_schema);
    assert_eq!(
        output.value,
        Some(json!({ "Firstname": "JOHN", "Age": 42, "Lastname": null }))
    );
}

/// One configured transformation shared by many threads gives every thread
/// the same result as a single-threaded run.
#[test]
fn test_concurrent_apply_with_shared_transform() {
    let transform = uppercase_transform();
    let names = [("Ada", "Lovelace"), ("Alan", "Turing"), ("Grace", "Hopper"), ("Edsger", "Dijkstra")];

    let results: Vec<Record> = std::thread::scope(|scope| {
        let handles: Vec<_> = names
            .iter()
            .map(|(first, last)| {
                let transform = &transform;
                scope.spawn(move || {
                    let record = person_record(first, last);
                    transform.apply(&record).unwrap().into_owned()
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    for ((first, last), output) in names.iter().zip(&results) {
        let expected = uppercase_transform().apply(&person_record(first, last)).unwrap().into_owned();
        assert_eq!(output, &expected);
    }
}

#[test]
fn test_key_and_value_sides_are_independent() {
    let mut key_transform = ChangeCase::new(Side::Key);
    key_transform
        .configure(
            &Settings::new()
                .with(FIELD_LIST_CONFIG, "Firstname")
                .with(CASE_CONFIG, "Lowercase"),
        )
        .unwrap();

    let value = person("John", "Doe");
    let schema = person_schema();
    let record = Record::new("people")
        .with_key(Some(schema.clone()), Some(value.clone()))
        .with_value(Some(schema), Some(value.clone()));

    let output = key_transform.apply(&record).unwrap();
    let key = output.key.as_ref().and_then(Value::as_struct).unwrap();
    assert_eq!(key.get_str("Firstname").unwrap(), Some("john"));
    assert_eq!(output.value, Some(value));
}

#[test]
fn test_key_side_transform_carries_schemaless_object_value() {
    let document: RecordDocument = serde_json::from_value(json!({
        "topic": "people",
        "key_schema": {
            "type": "struct",
            "fields": [{ "name": "Firstname", "schema": { "type": "string" } }]
        },
        "key": { "Firstname": "John" },
        "value": { "any": "schemaless", "payload": [1, 2] }
    }))
    .unwrap();

    let mut transform = ChangeCase::key();
    transform
        .configure(
            &Settings::new()
                .with(FIELD_LIST_CONFIG, "Firstname")
                .with(CASE_CONFIG, "Uppercase"),
        )
        .unwrap();

    let record = Record::from_document(&document).unwrap();
    let output = transform.apply(&record).unwrap().to_document();

    assert_eq!(output.key, Some(json!({ "Firstname": "JOHN" })));
    assert_eq!(output.value, document.value);
}
