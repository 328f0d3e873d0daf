// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The change-case transformation as seen by a record-processing host.
//!
//! [`ChangeCase`] ties the configuration validator and the recursive rewrite
//! into the [`Transformation`] lifecycle. Per record it dispatches on the
//! operating side:
//!
//! * value absent: the record is returned as-is (borrowed, not copied)
//! * schema absent (schemaless): the record is returned as-is
//! * schema present, value not a struct: [`TransformError::Shape`]
//! * struct built for a different schema: [`TransformError::SchemaMismatch`]
//! * otherwise: a new record with the rewritten struct on the operating side
//!
//! # Example
//! ```rust
//! use recase::config::Settings;
//! use recase::data::{Schema, SchemaBuilder, Struct, Value};
//! use recase::record::Record;
//! use recase::traits::Transformation;
//! use recase::transform::ChangeCase;
//! use std::sync::Arc;
//!
//! let mut transform = ChangeCase::value();
//! transform.configure(
//!     &Settings::new()
//!         .with("fields.list", "Firstname")
//!         .with("case", "Lowercase"),
//! )?;
//!
//! let schema: Arc<Schema> = SchemaBuilder::struct_()
//!     .field("Firstname", Schema::string())?
//!     .into();
//! let mut value = Struct::new(schema.clone())?;
//! value.put("Firstname", "JOHN")?;
//!
//! let record = Record::new("people").with_value(Some(schema), Some(Value::from(value)));
//! let output = transform.apply(&record)?;
//!
//! let changed = output.value.as_ref().and_then(Value::as_struct).unwrap();
//! assert_eq!(changed.get_str("Firstname")?, Some("john"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

use crate::config::consts::PURPOSE;
use crate::config::{change_case_config_def, validate_against, ConfigDef, Settings, TransformConfig};
use crate::data::Value;
use crate::errors::{ConfigError, TransformError};
use crate::observability::messages::transform::*;
use crate::observability::messages::StructuredLog;
use crate::record::Record;
use crate::traits::Transformation;
use crate::transform::recursive::FieldRewriter;
use crate::transform::side::Side;
use crate::VERSION;

const NAME: &str = "change_case";

/// Changes the case of configured string fields on one side of each record.
#[derive(Debug, Clone)]
pub struct ChangeCase {
    side: Side,
    config_def: ConfigDef,
    config: Option<TransformConfig>,
}

impl ChangeCase {
    /// Unconfigured transformation for the given side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            config_def: change_case_config_def(),
            config: None,
        }
    }

    pub fn key() -> Self {
        Self::new(Side::Key)
    }

    pub fn value() -> Self {
        Self::new(Side::Value)
    }

    /// Transformation with an already-validated configuration
    pub fn with_config(side: Side, config: TransformConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::new(side)
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Active configuration, once `configure` has succeeded
    pub fn transform_config(&self) -> Option<&TransformConfig> {
        self.config.as_ref()
    }

    fn fail<'a>(&self, record: &Record, error: TransformError) -> Result<Cow<'a, Record>, TransformError> {
        RecordTransformFailed {
            side: self.side.name(),
            topic: &record.topic,
            error: &error,
        }
        .log();
        Err(error)
    }
}

impl Transformation for ChangeCase {
    fn configure(&mut self, settings: &Settings) -> Result<(), ConfigError> {
        self.config = None;
        self.config = Some(validate_against(&self.config_def, settings)?);
        Ok(())
    }

    fn apply<'a>(&self, record: &'a Record) -> Result<Cow<'a, Record>, TransformError> {
        let side = self.side.name();
        let Some(config) = self.config.as_ref() else {
            return self.fail(record, TransformError::NotConfigured(NAME));
        };

        let Some(value) = self.side.operating_value(record) else {
            AbsentValuePassthrough { side, topic: &record.topic }.log();
            return Ok(Cow::Borrowed(record));
        };

        let Some(schema) = self.side.operating_schema(record) else {
            SchemalessPassthrough { side, topic: &record.topic }.log();
            return Ok(Cow::Borrowed(record));
        };

        let Value::Struct(input) = value else {
            let error = TransformError::Shape {
                purpose: PURPOSE,
                found: value.schema_type().to_string(),
            };
            return self.fail(record, error);
        };

        if !Arc::ptr_eq(input.schema(), schema) && input.schema() != schema {
            return self.fail(record, TransformError::SchemaMismatch { side: self.side.name() });
        }

        let start_msg = RecordTransformStarted {
            side,
            topic: &record.topic,
            field_count: input.schema().fields().len(),
        };
        let span = start_msg.span(NAME);
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let mut rewriter = FieldRewriter::new(config);
        let updated = rewriter.rewrite(input);

        RecordTransformCompleted {
            side,
            topic: &record.topic,
            converted_fields: rewriter.converted(),
            duration: start_time.elapsed(),
        }
        .log();

        Ok(Cow::Owned(self.side.new_record(
            record,
            Some(schema.clone()),
            Some(Value::Struct(updated)),
        )))
    }

    fn config(&self) -> &ConfigDef {
        &self.config_def
    }

    fn close(&mut self) {}

    fn version(&self) -> &'static str {
        VERSION
    }

    fn name(&self) -> &'static str {
        NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{CASE_CONFIG, FIELD_LIST_CONFIG};
    use crate::config::Case;
    use crate::data::{Schema, SchemaBuilder, SchemaType, Struct};

    fn name_schema() -> Arc<Schema> {
        SchemaBuilder::struct_()
            .field("Name", Schema::optional_string())
            .unwrap()
            .into()
    }

    fn name_struct(name: &str) -> Value {
        let mut value = Struct::new(name_schema()).unwrap();
        value.put("Name", name).unwrap();
        Value::Struct(value)
    }

    fn configured(side: Side) -> ChangeCase {
        let mut transform = ChangeCase::new(side);
        transform
            .configure(
                &Settings::new()
                    .with(FIELD_LIST_CONFIG, "Name")
                    .with(CASE_CONFIG, "Uppercase"),
            )
            .unwrap();
        transform
    }

    #[test]
    fn test_apply_before_configure_fails() {
        let transform = ChangeCase::value();
        let record = Record::new("t").with_value(Some(name_schema()), Some(name_struct("x")));

        assert_eq!(
            transform.apply(&record).unwrap_err(),
            TransformError::NotConfigured("change_case")
        );
    }

    #[test]
    fn test_failed_configure_leaves_transformation_unconfigured() {
        let mut transform = configured(Side::Value);
        assert!(transform.configure(&Settings::new().with(CASE_CONFIG, "")).is_err());
        assert!(transform.transform_config().is_none());
    }

    #[test]
    fn test_absent_value_returns_same_record() {
        let transform = configured(Side::Value);
        let record = Record::new("t").with_value(Some(name_schema()), None);

        let output = transform.apply(&record).unwrap();
        assert!(matches!(output, Cow::Borrowed(r) if std::ptr::eq(r, &record)));
    }

    #[test]
    fn test_schemaless_record_returns_same_record() {
        let transform = configured(Side::Value);
        let record = Record::new("t").with_value(None, Some(Value::from("raw text")));

        let output = transform.apply(&record).unwrap();
        assert!(matches!(output, Cow::Borrowed(r) if std::ptr::eq(r, &record)));
    }

    #[test]
    fn test_non_struct_value_with_schema_is_shape_error() {
        let transform = configured(Side::Value);
        let record = Record::new("t").with_value(Some(Arc::new(Schema::string())), Some(Value::from("x")));

        let error = transform.apply(&record).unwrap_err();
        assert_eq!(
            error,
            TransformError::Shape {
                purpose: "change case",
                found: "string".to_string(),
            }
        );
        assert_eq!(
            error.to_string(),
            "Only Struct objects supported for [change case], found: string"
        );
    }

    #[test]
    fn test_struct_with_other_schema_is_rejected() {
        let transform = configured(Side::Value);
        let declared: Arc<Schema> = SchemaBuilder::struct_()
            .field("Other", Schema::optional_string())
            .unwrap()
            .into();
        let record = Record::new("t").with_value(Some(declared), Some(name_struct("x")));

        assert_eq!(
            transform.apply(&record).unwrap_err(),
            TransformError::SchemaMismatch { side: "value" }
        );
    }

    #[test]
    fn test_equal_schema_in_separate_allocation_is_accepted() {
        let transform = configured(Side::Value);
        let record = Record::new("t").with_value(Some(name_schema()), Some(name_struct("x")));

        let output = transform.apply(&record).unwrap();
        assert_eq!(output.value, Some(name_struct("X")));
    }

    #[test]
    fn test_value_side() {
        let transform = configured(Side::Value);
        let record = Record::new("t")
            .with_key(Some(name_schema()), Some(name_struct("key")))
            .with_value(Some(name_schema()), Some(name_struct("value")));

        let output = transform.apply(&record).unwrap().into_owned();
        assert_eq!(output.key, record.key);
        assert_eq!(output.value, Some(name_struct("VALUE")));
        assert!(Arc::ptr_eq(
            output.value_schema.as_ref().unwrap(),
            record.value_schema.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_key_side() {
        let transform = configured(Side::Key);
        let record = Record::new("t")
            .with_partition(1)
            .with_timestamp(99)
            .with_key(Some(name_schema()), Some(name_struct("key")))
            .with_value(None, Some(Value::Int64(5)));

        let output = transform.apply(&record).unwrap().into_owned();
        assert_eq!(output.key, Some(name_struct("KEY")));
        assert_eq!(output.value, Some(Value::Int64(5)));
        assert_eq!(output.partition, Some(1));
        assert_eq!(output.timestamp, Some(99));
    }

    #[test]
    fn test_with_config_skips_settings() {
        let config = TransformConfig::new(vec!["Name".to_string()], Case::Lowercase);
        let transform = ChangeCase::with_config(Side::Value, config);
        let record = Record::new("t").with_value(Some(name_schema()), Some(name_struct("MiXeD")));

        let output = transform.apply(&record).unwrap();
        assert_eq!(output.value, Some(name_struct("mixed")));
    }

    #[test]
    fn test_config_describes_options() {
        let transform = ChangeCase::value();
        let names: Vec<_> = transform.config().keys().iter().map(|k| k.name).collect();
        assert_eq!(names, vec![FIELD_LIST_CONFIG, CASE_CONFIG]);
    }

    #[test]
    fn test_version_and_close() {
        let mut key = ChangeCase::key();
        let value = ChangeCase::value();
        assert_eq!(key.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(key.version(), value.version());
        key.close();
        key.close();
    }

    #[test]
    fn test_bytes_value_with_schema_reports_type() {
        let transform = configured(Side::Value);
        let record = Record::new("t").with_value(
            Some(Arc::new(Schema::of(SchemaType::Bytes))),
            Some(Value::Bytes(vec![1, 2])),
        );

        assert!(matches!(
            transform.apply(&record),
            Err(TransformError::Shape { ref found, .. }) if found == "bytes"
        ));
    }
}
