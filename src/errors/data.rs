// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for building schemas and structured values.

use crate::data::SchemaType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// The struct schema has no field with this name
    #[error("'{0}' is not a valid field name")]
    UnknownField(String),

    /// A struct schema already contains a field with this name
    #[error("Cannot create field because of field name duplication: '{0}'")]
    DuplicateField(String),

    /// A value does not match the declared type of its field
    #[error("Invalid value for field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: SchemaType,
        found: SchemaType,
    },

    /// A nested struct value was built for a different schema than its field
    #[error("Struct value for field '{0}' does not match the field schema")]
    SchemaMismatch(String),

    /// A non-optional field has no value
    #[error("Missing value for required field '{0}'")]
    MissingRequiredField(String),

    /// Fields or struct values were requested from a non-struct schema
    #[error("Expected a struct schema, found {0}")]
    NotAStruct(SchemaType),

    /// A JSON document could not be mapped onto a schema
    #[error("Invalid JSON for '{path}': {message}")]
    Json { path: String, message: String },
}
