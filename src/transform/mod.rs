// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The change-case transformation.
//!
//! * [`change_case()`] - the pure, schema-aware rewrite of one struct
//! * [`Side`] - selects the key or value side of a record
//! * [`ChangeCase`] - host-facing lifecycle (`configure`, `apply`, `close`)

mod change_case;
mod recursive;
mod side;

#[cfg(test)]
mod integration_tests;

pub use change_case::ChangeCase;
pub use recursive::{change_case, FieldRewriter};
pub use side::Side;
