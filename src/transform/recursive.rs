// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Recursive, schema-aware case rewrite of a structured record.
//!
//! The rewrite walks the struct schema depth-first, in field order, and builds
//! a new struct with the identical schema:
//!
//! 1. A `struct` field holding a value is rebuilt recursively from its own
//!    sub-schema.
//! 2. A `string` field whose name is configured has its value case-converted.
//!    Names match at every depth, not only at the top level.
//! 3. Anything else (other scalars, unselected strings, nulls) is copied
//!    unchanged. A null string stays null.
//!
//! The input is only read, so one [`TransformConfig`] can drive rewrites on
//! many threads at once. Depth is bounded by the schema, which is a tree.
//!
//! # Example
//! ```rust
//! use recase::config::{Case, TransformConfig};
//! use recase::data::{Schema, SchemaBuilder, Struct};
//! use recase::transform::change_case;
//!
//! let schema = SchemaBuilder::struct_()
//!     .field("Firstname", Schema::optional_string())?
//!     .field("Nickname", Schema::optional_string())?
//!     .build();
//! let mut person = Struct::new(schema)?;
//! person.put("Firstname", "John")?.put("Nickname", "Jo")?;
//!
//! let config = TransformConfig::new(vec!["Firstname".to_string()], Case::Uppercase);
//! let changed = change_case(&person, &config);
//!
//! assert_eq!(changed.get_str("Firstname")?, Some("JOHN"));
//! assert_eq!(changed.get_str("Nickname")?, Some("Jo"));
//! # Ok::<(), recase::errors::DataError>(())
//! ```

use crate::config::TransformConfig;
use crate::data::{Field, SchemaType, Struct, Value};
use std::sync::Arc;

/// Rewrite a struct under the given configuration, returning a new struct.
pub fn change_case(input: &Struct, config: &TransformConfig) -> Struct {
    FieldRewriter::new(config).rewrite(input)
}

/// Depth-first rewriter that also counts the string values it converted.
pub struct FieldRewriter<'a> {
    config: &'a TransformConfig,
    converted: usize,
}

impl<'a> FieldRewriter<'a> {
    pub fn new(config: &'a TransformConfig) -> Self {
        Self {
            config,
            converted: 0,
        }
    }

    /// Number of string values converted so far
    pub fn converted(&self) -> usize {
        self.converted
    }

    pub fn rewrite(&mut self, input: &Struct) -> Struct {
        let schema = input.schema();
        let values = schema
            .fields()
            .iter()
            .map(|field| self.rewrite_field(field, input.get_field(field)))
            .collect();
        Struct::from_parts(Arc::clone(schema), values)
    }

    fn rewrite_field(&mut self, field: &Field, value: Option<&Value>) -> Option<Value> {
        match (field.schema().schema_type(), value) {
            (SchemaType::Struct, Some(Value::Struct(nested))) => {
                Some(Value::Struct(self.rewrite(nested)))
            }
            (SchemaType::String, Some(Value::String(text))) if self.config.matches(field.name()) => {
                self.converted += 1;
                Some(Value::String(self.config.case().apply(text)))
            }
            (_, value) => value.cloned(),
        }
    }
}
