// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Schemas describing the shape of structured records.
//!
//! A [`Schema`] is a tree: a `Struct` schema owns an ordered list of [`Field`]s,
//! each of which carries its own schema. Nested schemas are shared through `Arc`
//! so that a transformed record can reuse the exact schema of its input.
//!
//! # Example
//! ```rust
//! use recase::data::{Schema, SchemaBuilder};
//!
//! let info = SchemaBuilder::struct_()
//!     .field("Lower", Schema::optional_string())?
//!     .field("Upper", Schema::optional_string())?
//!     .build();
//! let person = SchemaBuilder::struct_()
//!     .field("Firstname", Schema::optional_string())?
//!     .field("Info", info)?
//!     .build();
//!
//! assert_eq!(person.fields().len(), 2);
//! assert_eq!(person.field("Info").map(|f| f.index()), Some(1));
//! # Ok::<(), recase::errors::DataError>(())
//! ```

use crate::errors::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Declared type of a schema.
///
/// `String` and `Struct` are the only types the case transformation looks at;
/// every other type is an opaque scalar that is copied through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaType {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String,
    Bytes,
    Struct,
}

impl SchemaType {
    pub fn name(&self) -> &'static str {
        match self {
            SchemaType::Boolean => "boolean",
            SchemaType::Int8 => "int8",
            SchemaType::Int16 => "int16",
            SchemaType::Int32 => "int32",
            SchemaType::Int64 => "int64",
            SchemaType::Float32 => "float32",
            SchemaType::Float64 => "float64",
            SchemaType::String => "string",
            SchemaType::Bytes => "bytes",
            SchemaType::Struct => "struct",
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, SchemaType::Struct)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Field descriptor: a named, positioned slot inside a struct schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    name: String,
    #[serde(skip)]
    index: usize,
    schema: Arc<Schema>,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the field within its enclosing struct
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}

/// Schema of a value: its type, optionality, and (for structs) its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDef")]
pub struct Schema {
    #[serde(rename = "type")]
    schema_type: SchemaType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<Field>,
}

impl Schema {
    /// Required schema of the given type, with no fields
    pub fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            optional: false,
            name: None,
            fields: Vec::new(),
        }
    }

    /// Optional schema of the given type, with no fields
    pub fn optional_of(schema_type: SchemaType) -> Self {
        Self {
            optional: true,
            ..Self::of(schema_type)
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn optional_string() -> Self {
        Self::optional_of(SchemaType::String)
    }

    pub fn schema_type(&self) -> SchemaType {
        self.schema_type
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Fields of a struct schema, in declaration order (empty for scalars)
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Builder for [`Schema`], enforcing unique field names within a struct.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema: Schema::of(schema_type),
        }
    }

    pub fn struct_() -> Self {
        Self::new(SchemaType::Struct)
    }

    pub fn optional(mut self) -> Self {
        self.schema.optional = true;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.schema.name = Some(name.into());
        self
    }

    /// Append a field to a struct schema.
    ///
    /// Fails with [`DataError::NotAStruct`] on scalar schemas and with
    /// [`DataError::DuplicateField`] when the name is already taken.
    pub fn field(
        mut self,
        name: impl Into<String>,
        schema: impl Into<Arc<Schema>>,
    ) -> Result<Self, DataError> {
        if self.schema.schema_type != SchemaType::Struct {
            return Err(DataError::NotAStruct(self.schema.schema_type));
        }

        let name = name.into();
        if self.schema.field(&name).is_some() {
            return Err(DataError::DuplicateField(name));
        }

        let index = self.schema.fields.len();
        self.schema.fields.push(Field {
            name,
            index,
            schema: schema.into(),
        });
        Ok(self)
    }

    pub fn build(self) -> Schema {
        self.schema
    }
}

impl From<SchemaBuilder> for Arc<Schema> {
    fn from(builder: SchemaBuilder) -> Self {
        Arc::new(builder.build())
    }
}

/// Wire shape of a schema; field indices are assigned while rebuilding.
#[derive(Deserialize)]
struct SchemaDef {
    #[serde(rename = "type")]
    schema_type: SchemaType,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fields: Vec<FieldDef>,
}

#[derive(Deserialize)]
struct FieldDef {
    name: String,
    schema: SchemaDef,
}

impl TryFrom<SchemaDef> for Schema {
    type Error = DataError;

    fn try_from(def: SchemaDef) -> Result<Self, Self::Error> {
        if def.schema_type != SchemaType::Struct && !def.fields.is_empty() {
            return Err(DataError::NotAStruct(def.schema_type));
        }

        let mut builder = SchemaBuilder::new(def.schema_type);
        builder.schema.optional = def.optional;
        builder.schema.name = def.name;
        for field in def.fields {
            builder = builder.field(field.name, Schema::try_from(field.schema)?)?;
        }
        Ok(builder.build())
    }
}
