// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Run-level errors and the failure-handling contract between the pipeline
//! runner and its caller.

use crate::errors::RecordError;
use serde::Deserialize;
use thiserror::Error;

/// How the pipeline runner reacts when a record fails mid-pipeline.
///
/// The transforms themselves only raise [`RecordError`]; whether a bad record
/// aborts the whole run or is dropped is a runner policy, chosen in config.
/// The default is `FailFast` so that data problems are never swallowed
/// silently; `SkipRecords` is an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Abort the run on the first record that fails.
    #[default]
    FailFast,
    /// Log the failed record at WARN and continue; the run reports how many
    /// records were skipped.
    SkipRecords,
}

/// Errors surfaced by a pipeline run as a whole.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// A record failed and the failure strategy is fail-fast.
    ///
    /// `line` is the 1-based line number in the source file, header included.
    #[error("record at line {line} failed: {source}")]
    RecordFailed {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// A record failed after the group barrier, where original line numbers
    /// are no longer known; the region group locates it instead.
    #[error("record in region group '{region}' failed: {source}")]
    GroupedRecordFailed {
        region: String,
        #[source]
        source: RecordError,
    },

    /// The dataset file could not be opened or read.
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A map-phase worker task aborted unexpectedly.
    #[error("internal error: {message}")]
    Internal { message: String },
}
