// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_yaml::Value as RawValue;
use std::collections::HashMap;

/// Newtype wrapper for raw, unvalidated settings (option name -> raw value)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings(pub HashMap<String, RawValue>);

impl Settings {
    /// Create an empty settings map
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.0.get(name)
    }

    /// Overlay `other` on top of these settings; its values win.
    pub fn merge(&mut self, other: Settings) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl From<HashMap<String, RawValue>> for Settings {
    fn from(map: HashMap<String, RawValue>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Render a raw value the way it appears in configuration error messages.
///
/// Strings are shown bare (so an empty string renders as nothing), everything
/// else in its JSON form.
pub fn render_raw(value: &RawValue) -> String {
    match value {
        RawValue::String(s) => s.clone(),
        RawValue::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{:?}", other)),
    }
}
