// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while turning raw settings into a validated configuration.
//!
//! Every variant is fatal at startup: no record is processed with a configuration
//! that failed to validate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while validating transformation settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting has the wrong primitive type (e.g. `case: 123`)
    #[error("Invalid value {value} for configuration {name}: {message}")]
    TypeMismatch {
        name: String,
        value: String,
        message: String,
    },

    /// A string setting that is not one of the accepted enum member names
    #[error(
        "Invalid value {value} for configuration {name}: Value must be one of: {}",
        .accepted.join(", ")
    )]
    InvalidEnumValue {
        name: String,
        value: String,
        /// Accepted member names, in declaration order
        accepted: Vec<String>,
    },

    /// A setting without a default value was not supplied
    #[error("Missing required configuration \"{name}\" which has no default value.")]
    MissingRequired { name: String },

    /// The settings file could not be read
    #[error("Failed to read settings file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file could not be parsed
    #[error("Failed to parse settings file '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

impl ConfigError {
    /// Name of the offending option, when the error concerns a single option.
    pub fn option_name(&self) -> Option<&str> {
        match self {
            ConfigError::TypeMismatch { name, .. }
            | ConfigError::InvalidEnumValue { name, .. }
            | ConfigError::MissingRequired { name } => Some(name),
            ConfigError::Io { .. } | ConfigError::Parse { .. } => None,
        }
    }
}
