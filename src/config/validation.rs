// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for the change-case transformation.
//!
//! Raw settings are checked once, before any record is processed, and turned
//! into an immutable [`TransformConfig`]. Validation is deterministic and
//! fails fast: the first invalid option aborts with a [`ConfigError`] naming
//! the option, the offending value, and (for enum options) every accepted value.
//!
//! # Options
//!
//! | name          | type   | default | notes                                   |
//! |---------------|--------|---------|-----------------------------------------|
//! | `fields.list` | list   | `[]`    | unknown names are allowed, never match  |
//! | `case`        | string | none    | one of the [`Case`] member names        |
//!
//! # Examples
//!
//! ```rust
//! use recase::config::{validate_and_build, Case, Settings};
//!
//! let settings = Settings::new()
//!     .with("fields.list", "Firstname,Lastname")
//!     .with("case", "Uppercase");
//!
//! let config = validate_and_build(&settings)?;
//! assert_eq!(config.case(), Case::Uppercase);
//! assert!(config.matches("Lastname"));
//! # Ok::<(), recase::errors::ConfigError>(())
//! ```
//!
//! ```rust
//! use recase::config::{validate_and_build, Settings};
//! use recase::errors::ConfigError;
//!
//! let error = validate_and_build(&Settings::new().with("case", "")).unwrap_err();
//! assert!(matches!(error, ConfigError::InvalidEnumValue { .. }));
//! ```

use crate::config::case::{Case, NamedVariants};
use crate::config::consts::{CASE_CONFIG, FIELD_LIST_CONFIG};
use crate::config::definition::{ConfigDef, ConfigType, Importance, ParsedValue};
use crate::config::settings::Settings;
use crate::errors::ConfigError;
use crate::observability::messages::config::{ConfigurationRejected, ConfigurationValidated};
use crate::observability::messages::StructuredLog;

/// Validated, immutable configuration of the change-case transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    fields: Vec<String>,
    case: Case,
}

impl TransformConfig {
    pub fn new(fields: Vec<String>, case: Case) -> Self {
        Self { fields, case }
    }

    /// Configured field names, in configuration order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn case(&self) -> Case {
        self.case
    }

    /// Whether a field with this name is selected, at any nesting level
    pub fn matches(&self, field_name: &str) -> bool {
        self.fields.iter().any(|name| name == field_name)
    }
}

/// Option definitions understood by the change-case transformation.
pub fn change_case_config_def() -> ConfigDef {
    ConfigDef::new()
        .define(
            FIELD_LIST_CONFIG,
            ConfigType::List,
            Some(ParsedValue::List(Vec::new())),
            Importance::Medium,
            "List of fields to change case.",
        )
        .define_enum::<Case>(
            CASE_CONFIG,
            None,
            Importance::High,
            "Uppercase or Lowercase.",
        )
}

/// Validate raw settings and build the transformation configuration.
///
/// # Errors
///
/// * [`ConfigError::TypeMismatch`] - `case` is not a string, or `fields.list` is
///   neither a list of strings nor a comma-separated string
/// * [`ConfigError::InvalidEnumValue`] - `case` is not exactly one of the
///   [`Case`] member names
/// * [`ConfigError::MissingRequired`] - `case` is absent
pub fn validate_and_build(settings: &Settings) -> Result<TransformConfig, ConfigError> {
    validate_against(&change_case_config_def(), settings)
}

/// Same as [`validate_and_build`], against an already-built definition.
pub fn validate_against(def: &ConfigDef, settings: &Settings) -> Result<TransformConfig, ConfigError> {
    let config = build(def, settings);
    match &config {
        Ok(config) => ConfigurationValidated {
            fields: config.fields(),
            case: config.case().name(),
        }
        .log(),
        Err(error) => ConfigurationRejected { error }.log(),
    }
    config
}

fn build(def: &ConfigDef, settings: &Settings) -> Result<TransformConfig, ConfigError> {
    let parsed = def.parse(settings)?;

    let fields = parsed.list(FIELD_LIST_CONFIG).unwrap_or_default().to_vec();
    let case_name = parsed
        .string(CASE_CONFIG)
        .ok_or_else(|| ConfigError::MissingRequired {
            name: CASE_CONFIG.to_string(),
        })?;
    let case = Case::from_name(case_name).ok_or_else(|| ConfigError::InvalidEnumValue {
        name: CASE_CONFIG.to_string(),
        value: case_name.to_string(),
        accepted: Case::VARIANTS.iter().map(|v| v.to_string()).collect(),
    })?;

    Ok(TransformConfig::new(fields, case))
}
