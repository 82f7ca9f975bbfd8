// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-record failure kinds raised by the transforms and the case counter.
//!
//! All variants are local to a single record. The transforms never recover
//! from them; the pipeline runner applies the configured `FailureStrategy`
//! to decide between aborting the run and skipping the record.

use thiserror::Error;

/// A failure tied to one input record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// The raw line could not be decoded as text.
    #[error("malformed input line: {reason}")]
    MalformedLine { reason: String },

    /// A field the pipeline relies on is absent from the record.
    ///
    /// This happens when the field list was shorter than the schema and the
    /// missing position is one the pipeline reads (date or region field).
    #[error("record is missing expected field '{field}'")]
    MissingField { field: String },

    /// The date field cannot yield a year-month period.
    ///
    /// Requires at least two `-`-separated segments; anything less has no
    /// month component.
    #[error("date value '{value}' does not contain year and month segments")]
    MalformedDate { value: String },

    /// The case-count field is not a valid base-10 integer.
    ///
    /// There is no silent defaulting to zero; a bad count must surface.
    #[error("case count '{value}' is not a valid base-10 integer")]
    InvalidCaseCount { value: String },
}
