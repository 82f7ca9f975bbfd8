// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors that can occur during pipeline configuration validation.

use thiserror::Error;

/// A problem found while validating a loaded pipeline configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The schema has no field names at all.
    #[error("schema has no fields")]
    EmptySchema,

    /// The same field name appears more than once in the schema.
    #[error("schema field '{field}' appears more than once")]
    DuplicateField { field: String },

    /// A configured role (date, case-count or region field) names a field
    /// that is not part of the schema.
    #[error("{role} '{field}' is not a schema field")]
    UnknownFieldReference { role: &'static str, field: String },

    /// The delimiter must be exactly one character.
    #[error("delimiter '{delimiter}' is not a single character")]
    InvalidDelimiter { delimiter: String },

    /// `period` is produced by the period deriver and cannot double as an
    /// input column name.
    #[error("schema field '{field}' collides with the derived period field")]
    ReservedFieldName { field: String },
}
