// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Record data model: schemas, field descriptors, and structured values.

pub mod json;
mod schema;
mod value;

pub use schema::{Field, Schema, SchemaBuilder, SchemaType};
pub use value::{Struct, Value};
