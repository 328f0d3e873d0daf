// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::definition::ConfigDef;
use crate::config::settings::{render_raw, Settings};
use crate::config::validation::change_case_config_def;
use crate::errors::ConfigError;
use crate::observability::messages::config::SettingsLoaded;
use crate::observability::messages::StructuredLog;
use serde_yaml::Value as RawValue;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Load raw settings from a YAML (`.yaml`/`.yml`) or TOML (`.toml`) file.
///
/// Nested tables are flattened into dotted option names, so both of these
/// produce the `fields.list` option:
///
/// ```yaml
/// fields.list: [Firstname, Lastname]
/// case: Uppercase
/// ```
///
/// ```toml
/// case = "Uppercase"
///
/// [fields]
/// list = ["Firstname", "Lastname"]
/// ```
///
/// A mapping under a name that is itself a change-case option (e.g.
/// `case: {x: 1}`) is kept whole, so validation reports it against that option.
///
/// The settings are not validated here; pass them to
/// [`validate_and_build`](crate::config::validate_and_build).
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    load_settings_for(path, &change_case_config_def())
}

/// Same as [`load_settings`], keeping mappings whole under the options of `def`.
pub fn load_settings_for<P: AsRef<Path>>(path: P, def: &ConfigDef) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let parsed: Result<HashMap<String, RawValue>, String> = if is_toml {
        toml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };
    let raw = parsed.map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    let settings = flatten(raw, def);
    SettingsLoaded {
        path: &path.display().to_string(),
        option_count: settings.len(),
    }
    .log();
    Ok(settings)
}

fn flatten(raw: HashMap<String, RawValue>, def: &ConfigDef) -> Settings {
    let mut settings = Settings::new();
    for (name, value) in raw {
        flatten_into(&mut settings, def, name, value);
    }
    settings
}

fn flatten_into(settings: &mut Settings, def: &ConfigDef, prefix: String, value: RawValue) {
    match value {
        RawValue::Mapping(mapping) if def.key(&prefix).is_none() => {
            for (key, nested) in mapping {
                let key = match key {
                    RawValue::String(s) => s,
                    other => render_raw(&other),
                };
                flatten_into(settings, def, format!("{}.{}", prefix, key), nested);
            }
        }
        other => settings.insert(prefix, other),
    }
}
