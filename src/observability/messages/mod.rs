// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! # Organization
//!
//! * `config` - settings loading and configuration validation
//! * `transform` - per-record transformation events

use tracing::Span;

pub mod config;
pub mod transform;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message at its level, with its fields attached
    fn log(&self);

    /// Span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
