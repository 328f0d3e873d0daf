// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that abort the transformation of a single record.
///
/// A failed record never yields a partially rewritten output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The operating schema is present but the operating value is not a struct
    #[error("Only Struct objects supported for [{purpose}], found: {found}")]
    Shape {
        purpose: &'static str,
        found: String,
    },

    /// The struct on the operating side was built for a different schema than
    /// the one the record declares for that side
    #[error("Struct value on the record {side} does not match the record {side} schema")]
    SchemaMismatch { side: &'static str },

    /// `apply` was called before a successful `configure`
    #[error("Transformation '{0}' was applied before being configured")]
    NotConfigured(&'static str),
}
