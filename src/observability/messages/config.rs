// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for settings loading and configuration validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Raw settings read from a file.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct SettingsLoaded<'a> {
    pub path: &'a str,
    pub option_count: usize,
}

impl Display for SettingsLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} setting(s) from '{}'",
            self.option_count, self.path
        )
    }
}

impl StructuredLog for SettingsLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = self.path,
            option_count = self.option_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "settings_loaded",
            span_name = name,
            path = self.path,
            option_count = self.option_count,
        )
    }
}

/// Configuration validated and ready for use.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use recase::observability::messages::config::ConfigurationValidated;
///
/// let fields = vec!["Firstname".to_string(), "Lastname".to_string()];
/// let msg = ConfigurationValidated {
///     fields: &fields,
///     case: "Uppercase",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Configuration validated: case=Uppercase, fields=[Firstname, Lastname]"
/// );
/// ```
pub struct ConfigurationValidated<'a> {
    pub fields: &'a [String],
    pub case: &'a str,
}

impl Display for ConfigurationValidated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration validated: case={}, fields=[{}]",
            self.case,
            self.fields.join(", ")
        )
    }
}

impl StructuredLog for ConfigurationValidated<'_> {
    fn log(&self) {
        tracing::info!(
            case = self.case,
            field_count = self.fields.len(),
            fields = %self.fields.join(","),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "configuration_validated",
            span_name = name,
            case = self.case,
            field_count = self.fields.len(),
        )
    }
}

/// Configuration rejected; no records will be processed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConfigurationRejected<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigurationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Configuration rejected: {}", self.error)
    }
}

impl StructuredLog for ConfigurationRejected<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "configuration_rejected",
            span_name = name,
            error = %self.error,
        )
    }
}
