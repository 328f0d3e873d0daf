// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;         // option definitions + validation
pub mod data;           // schemas and structured values
pub mod errors;         // error handling
pub mod observability;
pub mod record;         // host record envelope
pub mod traits;         // host lifecycle contract
pub mod transform;      // the change-case transformation

/// Build version reported by every transformation
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
