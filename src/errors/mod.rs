// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod data;
mod transform;

pub use config::ConfigError;
pub use data::DataError;
pub use transform::TransformError;
