// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod case;
mod definition;
mod loader;
mod settings;
mod validation;

pub mod consts;

pub use case::{Case, NamedVariants};
pub use definition::{
    validate_enum, ConfigDef, ConfigKey, ConfigType, Importance, ParsedConfig, ParsedValue,
    Validator,
};
pub use loader::{load_settings, load_settings_for};
pub use settings::{render_raw, Settings};
pub use validation::{change_case_config_def, validate_against, validate_and_build, TransformConfig};
