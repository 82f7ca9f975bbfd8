// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline run lifecycle events.
//!
//! Each message is a plain struct with a `Display` implementation, logged at
//! the call site with `tracing` macros:
//!
//! ```
//! use caseflow::observability::messages::RunStarted;
//! use std::path::Path;
//!
//! let msg = RunStarted {
//!     dataset: Path::new("data/casos_dengue.txt"),
//!     partitions: 4,
//! };
//! tracing::info!("{}", msg);
//! ```

use crate::errors::RecordError;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

/// A pipeline run is starting.
///
/// # Log Level
/// `info!`
pub struct RunStarted<'a> {
    pub dataset: &'a Path,
    pub partitions: usize,
}

impl Display for RunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting aggregation run over '{}' with {} map partitions",
            self.dataset.display(),
            self.partitions
        )
    }
}

/// A record failed and the skip-records strategy dropped it.
///
/// # Log Level
/// `warn!` - data problem, run continues
pub struct RecordSkipped<'a> {
    /// 1-based line number, or `None` for failures past the group barrier.
    pub line: Option<usize>,
    pub error: &'a RecordError,
}

impl Display for RecordSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Skipping record at line {}: {}", line, self.error),
            None => write!(f, "Skipping grouped record: {}", self.error),
        }
    }
}

/// All records grouped; the barrier between keying and counting is complete.
///
/// # Log Level
/// `debug!`
pub struct GroupBarrierReached {
    pub groups: usize,
    pub records: usize,
}

impl Display for GroupBarrierReached {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Group barrier reached: {} records in {} region groups",
            self.records, self.groups
        )
    }
}

/// A pipeline run finished.
///
/// # Log Level
/// `info!`
pub struct RunCompleted {
    pub keys: usize,
    pub records_in: usize,
    pub records_skipped: usize,
    pub elapsed: Duration,
}

impl Display for RunCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Run complete: {} composite keys from {} records ({} skipped) in {:?}",
            self.keys, self.records_in, self.records_skipped, self.elapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_skipped_names_the_line_when_known() {
        let error = RecordError::MalformedDate {
            value: "20160315".to_string(),
        };
        let with_line = RecordSkipped {
            line: Some(7),
            error: &error,
        };
        assert!(with_line.to_string().contains("line 7"));

        let without_line = RecordSkipped {
            line: None,
            error: &error,
        };
        assert!(without_line.to_string().contains("grouped record"));
    }
}
