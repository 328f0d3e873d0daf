// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The record envelope exchanged with the host.
//!
//! A [`Record`] carries routing metadata (topic, partition, timestamp) plus a
//! key side and a value side. Each side is an optional schema and an optional
//! value. A side with a value but no schema is "schemaless".
//!
//! Schemaless JSON objects and arrays have no [`Value`] form. They are kept as
//! opaque JSON in `raw_key` / `raw_value` and written back verbatim.

use crate::data::json::{value_from_json, value_to_json};
use crate::data::{Schema, Value};
use crate::errors::DataError;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub topic: String,
    pub partition: Option<i32>,
    pub key_schema: Option<Arc<Schema>>,
    pub key: Option<Value>,
    pub value_schema: Option<Arc<Schema>>,
    pub value: Option<Value>,
    pub timestamp: Option<i64>,
    /// Schemaless structured key, carried through untouched
    pub raw_key: Option<Json>,
    /// Schemaless structured value, carried through untouched
    pub raw_value: Option<Json>,
}

impl Record {
    /// Record on a topic with both sides empty
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            partition: None,
            key_schema: None,
            key: None,
            value_schema: None,
            value: None,
            timestamp: None,
            raw_key: None,
            raw_value: None,
        }
    }

    pub fn with_partition(mut self, partition: i32) -> Self {
        self.partition = Some(partition);
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_key(mut self, schema: Option<Arc<Schema>>, key: Option<Value>) -> Self {
        self.key_schema = schema;
        self.key = key;
        self
    }

    pub fn with_value(mut self, schema: Option<Arc<Schema>>, value: Option<Value>) -> Self {
        self.value_schema = schema;
        self.value = value;
        self
    }

    /// Build a record from its JSON document form.
    ///
    /// Sides with a schema are converted against it. Schemaless scalars
    /// (strings, booleans, numbers) become [`Value`]s; schemaless objects and
    /// arrays are kept as opaque JSON.
    pub fn from_document(document: &RecordDocument) -> Result<Self, DataError> {
        let (key_schema, key, raw_key) = side_from_json(
            document.key_schema.as_ref(),
            document.key.as_ref(),
            "key",
        )?;
        let (value_schema, value, raw_value) = side_from_json(
            document.value_schema.as_ref(),
            document.value.as_ref(),
            "value",
        )?;

        Ok(Self {
            topic: document.topic.clone(),
            partition: document.partition,
            key_schema,
            key,
            value_schema,
            value,
            timestamp: document.timestamp,
            raw_key,
            raw_value,
        })
    }

    pub fn to_document(&self) -> RecordDocument {
        RecordDocument {
            topic: self.topic.clone(),
            partition: self.partition,
            timestamp: self.timestamp,
            key_schema: self.key_schema.as_deref().cloned(),
            key: side_to_json(self.key.as_ref(), self.raw_key.as_ref()),
            value_schema: self.value_schema.as_deref().cloned(),
            value: side_to_json(self.value.as_ref(), self.raw_value.as_ref()),
        }
    }
}

/// JSON form of a [`Record`], as read and written by the command line host.
///
/// ```json
/// {
///   "topic": "people",
///   "value_schema": { "type": "struct", "fields": [
///     { "name": "Firstname", "schema": { "type": "string", "optional": true } }
///   ] },
///   "value": { "Firstname": "John" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDocument {
    #[serde(default)]
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_schema: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_schema: Option<Schema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

type SideParts = (Option<Arc<Schema>>, Option<Value>, Option<Json>);

fn side_from_json(
    schema: Option<&Schema>,
    json: Option<&Json>,
    side: &str,
) -> Result<SideParts, DataError> {
    let json = json.filter(|json| !json.is_null());
    match (schema, json) {
        (Some(schema), json) => {
            let schema = Arc::new(schema.clone());
            let value = match json {
                Some(json) => value_from_json(&schema, json)?,
                None => None,
            };
            Ok((Some(schema), value, None))
        }
        (None, Some(json)) if json.is_object() || json.is_array() => {
            Ok((None, None, Some(json.clone())))
        }
        (None, Some(json)) => Ok((None, Some(schemaless_scalar(json, side)?), None)),
        (None, None) => Ok((None, None, None)),
    }
}

fn side_to_json(value: Option<&Value>, raw: Option<&Json>) -> Option<Json> {
    match value {
        Some(value) => Some(value_to_json(Some(value))),
        None => raw.cloned(),
    }
}

fn schemaless_scalar(json: &Json, side: &str) -> Result<Value, DataError> {
    match json {
        Json::Bool(b) => Ok(Value::Boolean(*b)),
        Json::String(s) => Ok(Value::String(s.clone())),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Int64(i)),
            None => n.as_f64().map(Value::Float64).ok_or_else(|| DataError::Json {
                path: side.to_string(),
                message: format!("unsupported number {}", n),
            }),
        },
        _ => Err(DataError::Json {
            path: side.to_string(),
            message: "expected a schemaless scalar".to_string(),
        }),
    }
}
