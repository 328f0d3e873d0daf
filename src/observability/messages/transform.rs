// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for per-record transformation events.
//!
//! Per-record messages log at `debug!`/`trace!` so that high-volume hosts are
//! quiet at the default level; only failures log at `error!`.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Record transformation started.
///
/// # Log Level
/// `trace!` - Fine-grained detail
///
/// # Example
/// ```
/// use recase::observability::messages::transform::RecordTransformStarted;
/// use recase::observability::messages::StructuredLog;
///
/// let msg = RecordTransformStarted {
///     side: "value",
///     topic: "people",
///     field_count: 3,
/// };
///
/// let span = msg.span("change_case");
/// let _guard = span.enter();
/// msg.log();
/// ```
pub struct RecordTransformStarted<'a> {
    pub side: &'a str,
    pub topic: &'a str,
    pub field_count: usize,
}

impl Display for RecordTransformStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Changing case of record {} on topic '{}': {} top-level field(s)",
            self.side, self.topic, self.field_count
        )
    }
}

impl StructuredLog for RecordTransformStarted<'_> {
    fn log(&self) {
        tracing::trace!(
            side = self.side,
            topic = self.topic,
            field_count = self.field_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "record_transform",
            span_name = name,
            side = self.side,
            topic = self.topic,
        )
    }
}

/// Record transformation completed.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct RecordTransformCompleted<'a> {
    pub side: &'a str,
    pub topic: &'a str,
    pub converted_fields: usize,
    pub duration: Duration,
}

impl Display for RecordTransformCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Changed case of record {} on topic '{}': converted={} field(s), duration={:?}",
            self.side, self.topic, self.converted_fields, self.duration
        )
    }
}

impl StructuredLog for RecordTransformCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            side = self.side,
            topic = self.topic,
            converted_fields = self.converted_fields,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "record_transform_completed",
            span_name = name,
            side = self.side,
            topic = self.topic,
            converted_fields = self.converted_fields,
        )
    }
}

/// Record passed through because its operating side has no schema.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct SchemalessPassthrough<'a> {
    pub side: &'a str,
    pub topic: &'a str,
}

impl Display for SchemalessPassthrough<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record {} on topic '{}' has no schema; passing through unchanged",
            self.side, self.topic
        )
    }
}

impl StructuredLog for SchemalessPassthrough<'_> {
    fn log(&self) {
        tracing::debug!(side = self.side, topic = self.topic, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "schemaless_passthrough",
            span_name = name,
            side = self.side,
            topic = self.topic,
        )
    }
}

/// Record passed through because its operating value is absent.
///
/// # Log Level
/// `trace!` - Fine-grained detail
pub struct AbsentValuePassthrough<'a> {
    pub side: &'a str,
    pub topic: &'a str,
}

impl Display for AbsentValuePassthrough<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Record {} on topic '{}' is null; passing through unchanged",
            self.side, self.topic
        )
    }
}

impl StructuredLog for AbsentValuePassthrough<'_> {
    fn log(&self) {
        tracing::trace!(side = self.side, topic = self.topic, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "absent_value_passthrough",
            span_name = name,
            side = self.side,
            topic = self.topic,
        )
    }
}

/// Record transformation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct RecordTransformFailed<'a> {
    pub side: &'a str,
    pub topic: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RecordTransformFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to change case of record {} on topic '{}': {}",
            self.side, self.topic, self.error
        )
    }
}

impl StructuredLog for RecordTransformFailed<'_> {
    fn log(&self) {
        tracing::error!(
            side = self.side,
            topic = self.topic,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "record_transform_failed",
            span_name = name,
            side = self.side,
            topic = self.topic,
            error = %self.error,
        )
    }
}
