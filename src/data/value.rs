// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::data::{Field, Schema, SchemaType};
use crate::errors::DataError;
use std::sync::Arc;

/// A typed value conforming to a [`Schema`].
///
/// Absent (null) values are represented as `None` wherever a value is optional,
/// so there is no null variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bytes(Vec<u8>),
    Struct(Struct),
}

impl Value {
    pub fn schema_type(&self) -> SchemaType {
        match self {
            Value::Boolean(_) => SchemaType::Boolean,
            Value::Int8(_) => SchemaType::Int8,
            Value::Int16(_) => SchemaType::Int16,
            Value::Int32(_) => SchemaType::Int32,
            Value::Int64(_) => SchemaType::Int64,
            Value::Float32(_) => SchemaType::Float32,
            Value::Float64(_) => SchemaType::Float64,
            Value::String(_) => SchemaType::String,
            Value::Bytes(_) => SchemaType::Bytes,
            Value::Struct(_) => SchemaType::Struct,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float64(n)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<Struct> for Value {
    fn from(s: Struct) -> Self {
        Value::Struct(s)
    }
}

/// Structured record: a struct schema plus one value slot per field.
///
/// Slots are positional (indexed by [`Field::index`]); `None` is a null value.
/// Every `put` is checked against the schema, so a `Struct` can never hold a
/// value whose type disagrees with its field.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    schema: Arc<Schema>,
    values: Vec<Option<Value>>,
}

impl Struct {
    /// Empty struct (all fields null) for a struct schema
    pub fn new(schema: impl Into<Arc<Schema>>) -> Result<Self, DataError> {
        let schema = schema.into();
        if schema.schema_type() != SchemaType::Struct {
            return Err(DataError::NotAStruct(schema.schema_type()));
        }
        let values = vec![None; schema.fields().len()];
        Ok(Self { schema, values })
    }

    /// Assemble a struct from already-checked slots, one per schema field.
    pub(crate) fn from_parts(schema: Arc<Schema>, values: Vec<Option<Value>>) -> Self {
        debug_assert_eq!(schema.fields().len(), values.len());
        Self { schema, values }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    fn lookup(&self, name: &str) -> Result<&Field, DataError> {
        self.schema
            .field(name)
            .ok_or_else(|| DataError::UnknownField(name.to_string()))
    }

    /// Set a field by name, checking the value against the field's schema.
    pub fn put(&mut self, name: &str, value: impl Into<Value>) -> Result<&mut Self, DataError> {
        let field = self.lookup(name)?;
        let value = value.into();
        check_value(field, &value)?;
        let index = field.index();
        self.values[index] = Some(value);
        Ok(self)
    }

    /// Set a field to null
    pub fn clear(&mut self, name: &str) -> Result<&mut Self, DataError> {
        let index = self.lookup(name)?.index();
        self.values[index] = None;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Result<Option<&Value>, DataError> {
        let field = self.lookup(name)?;
        Ok(self.get_field(field))
    }

    /// Slot for a field of this struct's schema
    pub fn get_field(&self, field: &Field) -> Option<&Value> {
        self.values.get(field.index()).and_then(Option::as_ref)
    }

    pub fn get_str(&self, name: &str) -> Result<Option<&str>, DataError> {
        Ok(self.get(name)?.and_then(Value::as_str))
    }

    pub fn get_struct(&self, name: &str) -> Result<Option<&Struct>, DataError> {
        Ok(self.get(name)?.and_then(Value::as_struct))
    }

    /// Check that every non-optional field is populated, recursively.
    pub fn validate(&self) -> Result<(), DataError> {
        for field in self.schema.fields() {
            match self.get_field(field) {
                None if !field.schema().is_optional() => {
                    return Err(DataError::MissingRequiredField(field.name().to_string()));
                }
                Some(Value::Struct(nested)) => nested.validate()?,
                _ => {}
            }
        }
        Ok(())
    }
}

fn check_value(field: &Field, value: &Value) -> Result<(), DataError> {
    let expected = field.schema().schema_type();
    let found = value.schema_type();
    if expected != found {
        return Err(DataError::TypeMismatch {
            field: field.name().to_string(),
            expected,
            found,
        });
    }

    if let Value::Struct(nested) = value {
        if nested.schema().as_ref() != field.schema().as_ref() {
            return Err(DataError::SchemaMismatch(field.name().to_string()));
        }
    }
    Ok(())
}
