// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for diagnostic and operational
//! logging. Message types follow a struct-based pattern with a `Display`
//! implementation and a [`StructuredLog`](messages::StructuredLog) implementation,
//! which emits the message through `tracing` with its fields attached.
//!
//! The library never installs a subscriber. Whatever subscriber the host has
//! installed receives these events; without one they are discarded.
//!
//! # Usage
//!
//! ```rust
//! use recase::observability::messages::transform::SchemalessPassthrough;
//! use recase::observability::messages::StructuredLog;
//!
//! SchemalessPassthrough { side: "value", topic: "people" }.log();
//! ```

pub mod messages;
