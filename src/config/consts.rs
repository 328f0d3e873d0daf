// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Option holding the names of the fields to rewrite
pub const FIELD_LIST_CONFIG: &str = "fields.list";
/// Option holding the case direction
pub const CASE_CONFIG: &str = "case";
/// Purpose reported when a record's operating value is not a struct
pub const PURPOSE: &str = "change case";
/// One-line description of the transformation
pub const OVERVIEW_DOC: &str = "Change text case on top of each field, e.g. word to WORD";
/// Separator accepted between names when `fields.list` is given as one string
pub const LIST_SEPARATOR: char = ',';
