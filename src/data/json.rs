// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Schema-guided conversion between [`Value`]s and `serde_json::Value`.
//!
//! Struct values map to JSON objects whose keys follow schema field order,
//! bytes map to base64 strings, and null maps to an absent value.

use crate::data::{Schema, SchemaType, Struct, Value};
use crate::errors::DataError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Number, Value as Json};
use std::sync::Arc;

/// Path used in error messages for the top-level value
const ROOT_PATH: &str = "$";

/// Convert a JSON document into a value of the given schema.
///
/// JSON `null` yields `None` for optional schemas and an error otherwise.
/// Object keys that are not fields of the schema are rejected.
pub fn value_from_json(schema: &Arc<Schema>, json: &Json) -> Result<Option<Value>, DataError> {
    convert(schema, json, ROOT_PATH)
}

/// Convert an optional value into JSON (`None` becomes `null`).
pub fn value_to_json(value: Option<&Value>) -> Json {
    match value {
        None => Json::Null,
        Some(value) => to_json(value),
    }
}

fn convert(schema: &Arc<Schema>, json: &Json, path: &str) -> Result<Option<Value>, DataError> {
    if json.is_null() {
        return if schema.is_optional() {
            Ok(None)
        } else {
            Err(DataError::MissingRequiredField(path.to_string()))
        };
    }

    let mismatch = || DataError::Json {
        path: path.to_string(),
        message: format!("expected {}, found {}", schema.schema_type(), json_kind(json)),
    };

    let value = match schema.schema_type() {
        SchemaType::Boolean => Value::Boolean(json.as_bool().ok_or_else(mismatch)?),
        SchemaType::Int8 => Value::Int8(integer(json, path)?),
        SchemaType::Int16 => Value::Int16(integer(json, path)?),
        SchemaType::Int32 => Value::Int32(integer(json, path)?),
        SchemaType::Int64 => Value::Int64(json.as_i64().ok_or_else(mismatch)?),
        SchemaType::Float32 => Value::Float32(json.as_f64().ok_or_else(mismatch)? as f32),
        SchemaType::Float64 => Value::Float64(json.as_f64().ok_or_else(mismatch)?),
        SchemaType::String => Value::String(json.as_str().ok_or_else(mismatch)?.to_string()),
        SchemaType::Bytes => {
            let encoded = json.as_str().ok_or_else(mismatch)?;
            let bytes = STANDARD.decode(encoded).map_err(|e| DataError::Json {
                path: path.to_string(),
                message: format!("invalid base64: {}", e),
            })?;
            Value::Bytes(bytes)
        }
        SchemaType::Struct => {
            let object = json.as_object().ok_or_else(mismatch)?;
            Value::Struct(struct_from_object(schema, object, path)?)
        }
    };
    Ok(Some(value))
}

fn struct_from_object(
    schema: &Arc<Schema>,
    object: &Map<String, Json>,
    path: &str,
) -> Result<Struct, DataError> {
    if let Some(unknown) = object.keys().find(|key| schema.field(key).is_none()) {
        return Err(DataError::UnknownField(format!("{}.{}", path, unknown)));
    }

    let mut values = Vec::with_capacity(schema.fields().len());
    for field in schema.fields() {
        let field_path = format!("{}.{}", path, field.name());
        let json = object.get(field.name()).unwrap_or(&Json::Null);
        values.push(convert(field.schema(), json, &field_path)?);
    }
    Ok(Struct::from_parts(schema.clone(), values))
}

fn integer<T: TryFrom<i64>>(json: &Json, path: &str) -> Result<T, DataError> {
    json.as_i64()
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| DataError::Json {
            path: path.to_string(),
            message: format!("{} is not a valid integer for this field", json),
        })
}

fn to_json(value: &Value) -> Json {
    match value {
        Value::Boolean(b) => Json::Bool(*b),
        Value::Int8(n) => Json::from(*n),
        Value::Int16(n) => Json::from(*n),
        Value::Int32(n) => Json::from(*n),
        Value::Int64(n) => Json::from(*n),
        Value::Float32(n) => float32(*n),
        Value::Float64(n) => float(*n),
        Value::String(s) => Json::String(s.clone()),
        Value::Bytes(bytes) => Json::String(STANDARD.encode(bytes)),
        Value::Struct(s) => {
            let object = s
                .schema()
                .fields()
                .iter()
                .map(|field| (field.name().to_string(), value_to_json(s.get_field(field))))
                .collect::<Map<_, _>>();
            Json::Object(object)
        }
    }
}

// Widen through the shortest decimal form, so 0.1f32 is written as 0.1
fn float32(n: f32) -> Json {
    n.to_string().parse::<f64>().map_or(Json::Null, float)
}

// NaN and infinities have no JSON representation
fn float(n: f64) -> Json {
    Number::from_f64(n).map(Json::Number).unwrap_or(Json::Null)
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SchemaBuilder;
    use serde_json::json;

    fn schema() -> Arc<Schema> {
        let info = SchemaBuilder::struct_()
            .optional()
            .field("Lower", Schema::optional_string())
            .unwrap()
            .field("Blob", Schema::optional_of(SchemaType::Bytes))
            .unwrap();
        SchemaBuilder::struct_()
            .field("Name", Schema::string())
            .unwrap()
            .field("Level", Schema::of(SchemaType::Int8))
            .unwrap()
            .field("Info", info)
            .unwrap()
            .into()
    }

    #[test]
    fn test_nested_object_converts_in_field_order() {
        let json = json!({
            "Info": { "Lower": "text", "Blob": "aGk=" },
            "Level": 3,
            "Name": "John"
        });

        let value = value_from_json(&schema(), &json).unwrap().unwrap();
        let record = value.as_struct().unwrap();
        assert_eq!(record.get_str("Name").unwrap(), Some("John"));
        assert_eq!(record.get("Level").unwrap(), Some(&Value::Int8(3)));

        let info = record.get_struct("Info").unwrap().unwrap();
        assert_eq!(info.get("Blob").unwrap(), Some(&Value::Bytes(b"hi".to_vec())));

        let keys: Vec<_> = value_to_json(Some(&value))
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, vec!["Name", "Level", "Info"]);
    }

    #[test]
    fn test_missing_optional_struct_is_null() {
        let json = json!({ "Name": "John", "Level": 1 });
        let value = value_from_json(&schema(), &json).unwrap().unwrap();
        assert_eq!(value.as_struct().unwrap().get("Info").unwrap(), None);
        assert_eq!(value_to_json(Some(&value))["Info"], Json::Null);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = json!({ "Level": 1 });
        assert_eq!(
            value_from_json(&schema(), &json).unwrap_err(),
            DataError::MissingRequiredField("$.Name".to_string())
        );
    }

    #[test]
    fn test_out_of_range_integer_is_rejected() {
        let json = json!({ "Name": "John", "Level": 300 });
        let error = value_from_json(&schema(), &json).unwrap_err();
        assert!(matches!(error, DataError::Json { ref path, .. } if path == "$.Level"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let json = json!({ "Name": "John", "Level": 1, "Nickname": "Jo" });
        assert_eq!(
            value_from_json(&schema(), &json).unwrap_err(),
            DataError::UnknownField("$.Nickname".to_string())
        );
    }

    #[test]
    fn test_type_mismatch_names_both_kinds() {
        let json = json!({ "Name": 12, "Level": 1 });
        let error = value_from_json(&schema(), &json).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid JSON for '$.Name': expected string, found number"
        );
    }

    #[test]
    fn test_float32_written_in_shortest_form() {
        let schema = Arc::new(Schema::of(SchemaType::Float32));
        let value = value_from_json(&schema, &json!(0.1)).unwrap();

        assert_eq!(value, Some(Value::Float32(0.1)));
        assert_eq!(value_to_json(value.as_ref()), json!(0.1));
        assert_eq!(value_to_json(Some(&Value::Float32(f32::NAN))), Json::Null);
    }
}
