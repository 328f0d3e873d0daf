// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::data::{Schema, Value};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which side of a record a transformation operates on.
///
/// Both sides are processed identically; the side only decides where the
/// schema and value are read from and where the result is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Key,
    #[default]
    Value,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Key => "key",
            Side::Value => "value",
        }
    }

    pub fn operating_schema<'r>(&self, record: &'r Record) -> Option<&'r Arc<Schema>> {
        match self {
            Side::Key => record.key_schema.as_ref(),
            Side::Value => record.value_schema.as_ref(),
        }
    }

    pub fn operating_value<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        match self {
            Side::Key => record.key.as_ref(),
            Side::Value => record.value.as_ref(),
        }
    }

    /// Copy of `record` with this side replaced.
    ///
    /// Topic, partition, timestamp and the other side are carried over unchanged.
    pub fn new_record(
        &self,
        record: &Record,
        updated_schema: Option<Arc<Schema>>,
        updated_value: Option<Value>,
    ) -> Record {
        let mut updated = Record {
            topic: record.topic.clone(),
            partition: record.partition,
            timestamp: record.timestamp,
            key_schema: None,
            key: None,
            value_schema: None,
            value: None,
            raw_key: None,
            raw_value: None,
        };

        match self {
            Side::Key => {
                updated.key_schema = updated_schema;
                updated.key = updated_value;
                updated.value_schema = record.value_schema.clone();
                updated.value = record.value.clone();
                updated.raw_value = record.raw_value.clone();
            }
            Side::Value => {
                updated.key_schema = record.key_schema.clone();
                updated.key = record.key.clone();
                updated.raw_key = record.raw_key.clone();
                updated.value_schema = updated_schema;
                updated.value = updated_value;
            }
        }
        updated
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "key" => Ok(Side::Key),
            "value" => Ok(Side::Value),
            _ => Err(format!("Unknown record side '{}', expected 'key' or 'value'", s)),
        }
    }
}
