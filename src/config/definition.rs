// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Self-describing option definitions.
//!
//! A [`ConfigDef`] lists every option a transformation understands: its type,
//! default, importance, documentation, and an optional validator. Parsing raw
//! [`Settings`] against the definition yields typed values or a precise
//! [`ConfigError`].
//!
//! # Example
//! ```rust
//! use recase::config::{ConfigDef, ConfigType, Importance, ParsedValue, Settings};
//!
//! let def = ConfigDef::new().define(
//!     "names",
//!     ConfigType::List,
//!     Some(ParsedValue::List(vec![])),
//!     Importance::Medium,
//!     "Names to look at.",
//! );
//!
//! let parsed = def.parse(&Settings::new().with("names", "a, b"))?;
//! assert_eq!(parsed.list("names"), Some(&["a".to_string(), "b".to_string()][..]));
//! # Ok::<(), recase::errors::ConfigError>(())
//! ```

use crate::config::case::NamedVariants;
use crate::config::consts::LIST_SEPARATOR;
use crate::config::settings::{render_raw, Settings};
use crate::errors::ConfigError;
use serde_yaml::Value as RawValue;
use std::collections::HashMap;
use std::fmt;

/// Checks a raw value before it is parsed into its declared type
pub type Validator = fn(name: &str, value: &RawValue) -> Result<(), ConfigError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigType {
    /// A list of strings, given as a sequence or a comma-separated string
    List,
    String,
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigType::List => f.write_str("list"),
            ConfigType::String => f.write_str("string"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Importance::High => f.write_str("high"),
            Importance::Medium => f.write_str("medium"),
            Importance::Low => f.write_str("low"),
        }
    }
}

/// A typed option value
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    List(Vec<String>),
    String(String),
}

/// Definition of a single option
#[derive(Debug, Clone)]
pub struct ConfigKey {
    pub name: &'static str,
    pub config_type: ConfigType,
    /// `None` means the option is required
    pub default: Option<ParsedValue>,
    pub validator: Option<Validator>,
    /// Accepted values, shown in option descriptions
    pub accepted: Option<&'static [&'static str]>,
    pub importance: Importance,
    pub documentation: &'static str,
}

/// Ordered collection of option definitions
#[derive(Debug, Clone, Default)]
pub struct ConfigDef {
    keys: Vec<ConfigKey>,
}

impl ConfigDef {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Define an option with no validator
    pub fn define(
        self,
        name: &'static str,
        config_type: ConfigType,
        default: Option<ParsedValue>,
        importance: Importance,
        documentation: &'static str,
    ) -> Self {
        self.define_key(ConfigKey {
            name,
            config_type,
            default,
            validator: None,
            accepted: None,
            importance,
            documentation,
        })
    }

    /// Define a string option restricted to the member names of `E`
    pub fn define_enum<E: NamedVariants>(
        self,
        name: &'static str,
        default: Option<ParsedValue>,
        importance: Importance,
        documentation: &'static str,
    ) -> Self {
        self.define_key(ConfigKey {
            name,
            config_type: ConfigType::String,
            default,
            validator: Some(validate_enum::<E> as Validator),
            accepted: Some(E::VARIANTS),
            importance,
            documentation,
        })
    }

    pub fn define_key(mut self, key: ConfigKey) -> Self {
        self.keys.retain(|existing| existing.name != key.name);
        self.keys.push(key);
        self
    }

    pub fn keys(&self) -> &[ConfigKey] {
        &self.keys
    }

    pub fn key(&self, name: &str) -> Option<&ConfigKey> {
        self.keys.iter().find(|key| key.name == name)
    }

    /// Parse raw settings against every defined option.
    ///
    /// Options are checked in definition order and the first failure is
    /// returned. Settings that match no definition are ignored.
    pub fn parse(&self, settings: &Settings) -> Result<ParsedConfig, ConfigError> {
        let mut values = HashMap::with_capacity(self.keys.len());
        for key in &self.keys {
            let value = match settings.get(key.name) {
                Some(raw) => {
                    if let Some(validator) = key.validator {
                        validator(key.name, raw)?;
                    }
                    parse_value(key, raw)?
                }
                None => key.default.clone().ok_or_else(|| ConfigError::MissingRequired {
                    name: key.name.to_string(),
                })?,
            };
            values.insert(key.name, value);
        }
        Ok(ParsedConfig { values })
    }

    /// Human-readable table of the defined options
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for key in &self.keys {
            out.push_str(&format!("{}\n", key.name));
            out.push_str(&format!("  {}\n", key.documentation));
            out.push_str(&format!("  Type: {}\n", key.config_type));
            match &key.default {
                Some(default) => out.push_str(&format!("  Default: {}\n", describe_value(default))),
                None => out.push_str("  Default: (required)\n"),
            }
            if let Some(accepted) = key.accepted {
                out.push_str(&format!("  Valid values: {}\n", accepted.join(", ")));
            }
            out.push_str(&format!("  Importance: {}\n", key.importance));
        }
        out
    }
}

/// Options parsed into their declared types
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedConfig {
    values: HashMap<&'static str, ParsedValue>,
}

impl ParsedConfig {
    pub fn get(&self, name: &str) -> Option<&ParsedValue> {
        self.values.get(name)
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(ParsedValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParsedValue::String(s)) => Some(s),
            _ => None,
        }
    }
}

/// Validator accepting only the member names of `E`, compared case-sensitively.
pub fn validate_enum<E: NamedVariants>(name: &str, value: &RawValue) -> Result<(), ConfigError> {
    match value {
        RawValue::String(s) if E::from_name(s).is_some() => Ok(()),
        RawValue::String(s) => Err(ConfigError::InvalidEnumValue {
            name: name.to_string(),
            value: s.clone(),
            accepted: E::VARIANTS.iter().map(|v| v.to_string()).collect(),
        }),
        other => Err(type_mismatch(name, other, "Value must be a string.")),
    }
}

fn parse_value(key: &ConfigKey, raw: &RawValue) -> Result<ParsedValue, ConfigError> {
    match key.config_type {
        ConfigType::String => match raw {
            RawValue::String(s) => Ok(ParsedValue::String(s.clone())),
            other => Err(type_mismatch(key.name, other, "Value must be a string.")),
        },
        ConfigType::List => parse_list(key.name, raw).map(ParsedValue::List),
    }
}

fn parse_list(name: &str, raw: &RawValue) -> Result<Vec<String>, ConfigError> {
    const LIST_MESSAGE: &str = "Value must be a list or a comma-separated string.";

    match raw {
        RawValue::String(s) => Ok(s
            .split(LIST_SEPARATOR)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()),
        RawValue::Sequence(items) => items
            .iter()
            .map(|item| match item {
                RawValue::String(s) => Ok(s.clone()),
                _ => Err(type_mismatch(name, raw, LIST_MESSAGE)),
            })
            .collect(),
        other => Err(type_mismatch(name, other, LIST_MESSAGE)),
    }
}

fn type_mismatch(name: &str, value: &RawValue, message: &str) -> ConfigError {
    ConfigError::TypeMismatch {
        name: name.to_string(),
        value: render_raw(value),
        message: message.to_string(),
    }
}

fn describe_value(value: &ParsedValue) -> String {
    match value {
        ParsedValue::List(items) => format!("[{}]", items.join(", ")),
        ParsedValue::String(s) => format!("\"{}\"", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::case::Case;

    fn def() -> ConfigDef {
        ConfigDef::new()
            .define(
                "names",
                ConfigType::List,
                Some(ParsedValue::List(vec![])),
                Importance::Medium,
                "Names.",
            )
            .define_enum::<Case>("case", None, Importance::High, "Case.")
    }

    #[test]
    fn test_list_from_comma_separated_string() {
        let settings = Settings::new()
            .with("names", " Firstname,Lastname ,, Lower")
            .with("case", "Uppercase");
        let parsed = def().parse(&settings).unwrap();

        assert_eq!(
            parsed.list("names").unwrap(),
            &["Firstname", "Lastname", "Lower"]
        );
        assert_eq!(parsed.string("case"), Some("Uppercase"));
    }

    #[test]
    fn test_list_from_sequence_keeps_order_and_duplicates() {
        let settings = Settings::new()
            .with("names", vec!["b", "a", "b"])
            .with("case", "Lowercase");
        let parsed = def().parse(&settings).unwrap();
        assert_eq!(parsed.list("names").unwrap(), &["b", "a", "b"]);
    }

    #[test]
    fn test_list_rejects_non_string_elements() {
        let settings = Settings::new()
            .with("names", RawValue::Sequence(vec![RawValue::from("a"), RawValue::from(1)]))
            .with("case", "Lowercase");

        let error = def().parse(&settings).unwrap_err();
        assert_eq!(
            error.to_string(),
            r#"Invalid value ["a",1] for configuration names: Value must be a list or a comma-separated string."#
        );
    }

    #[test]
    fn test_list_rejects_numbers() {
        let settings = Settings::new().with("names", 7).with("case", "Lowercase");
        assert!(matches!(
            def().parse(&settings),
            Err(ConfigError::TypeMismatch { ref name, .. }) if name == "names"
        ));
    }

    #[test]
    fn test_default_used_when_absent() {
        let parsed = def().parse(&Settings::new().with("case", "Lowercase")).unwrap();
        assert_eq!(parsed.list("names"), Some(&[][..]));
    }

    #[test]
    fn test_required_option_missing() {
        let error = def().parse(&Settings::new()).unwrap_err();
        assert!(matches!(error, ConfigError::MissingRequired { ref name } if name == "case"));
    }

    #[test]
    fn test_redefining_replaces_key() {
        let def = def().define("case", ConfigType::String, None, Importance::Low, "Other.");
        assert_eq!(def.keys().len(), 2);
        assert!(def.key("case").unwrap().validator.is_none());
    }

    #[test]
    fn test_describe_lists_accepted_values() {
        let text = def().describe();
        assert!(text.contains("Valid values: Uppercase, Lowercase"));
        assert!(text.contains("Default: (required)"));
        assert!(text.contains("Default: []"));
    }
}
