// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::borrow::Cow;

use crate::config::{ConfigDef, Settings};
use crate::errors::{ConfigError, TransformError};
use crate::record::Record;

/// Lifecycle contract between a record-processing host and a transformation.
///
/// The host calls `configure` once before any record, then `apply` for each
/// record (possibly from several threads at once), and `close` at shutdown.
pub trait Transformation: Send + Sync {
    /// Validate settings and prepare for processing.
    ///
    /// On error the transformation stays unconfigured and must not be applied.
    fn configure(&mut self, settings: &Settings) -> Result<(), ConfigError>;

    /// Transform one record.
    ///
    /// The input is never modified. A record that passes through untouched is
    /// returned borrowed; a transformed record is a new, owned value. On error
    /// no output record exists.
    fn apply<'a>(&self, record: &'a Record) -> Result<Cow<'a, Record>, TransformError>;

    /// Definitions of the options accepted by `configure`
    fn config(&self) -> &ConfigDef;

    /// Release resources held by the transformation
    fn close(&mut self);

    /// Build version of the transformation
    fn version(&self) -> &'static str;

    fn name(&self) -> &'static str;
}
