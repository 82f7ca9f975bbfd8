// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The in-process execution harness driving the aggregation pipeline.
//!
//! A run has three phases:
//!
//! 1. **Map phase** - record lines are partitioned into chunks and each
//!    chunk is shaped on its own tokio task: split, build, derive period,
//!    extract region key. Transforms touch one record at a time, so the
//!    tasks share nothing and may finish in any order.
//! 2. **Group barrier** - every partition's keyed records are merged into
//!    one table of region groups before any counting starts.
//! 3. **Count + reduce** - each group's count entries are folded into
//!    partial sums, which are merged associatively into the final aggregate.
//!
//! The configured [`FailureStrategy`] is applied wherever a record can fail:
//! fail-fast aborts the run with the offending line (or region group, past
//! the barrier), skip-records logs the record at WARN and keeps going.

use crate::config::{PipelineConfig, SchemaConfig};
use crate::engine::count::count_cases;
use crate::engine::group::group_by_key;
use crate::engine::reduce::{merge_partials, sum_counts};
use crate::errors::{ExecutionError, FailureStrategy, RecordError};
use crate::model::Record;
use crate::observability::messages::{
    GroupBarrierReached, RecordSkipped, RunCompleted, RunStarted,
};
use crate::source::{SourcedLine, TextLineSource};
use crate::transforms::{build_record, derive_period, extract_region_key, split_line};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Terminal output of one pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Composite key (`region-year-month`) to summed case count.
    pub aggregates: HashMap<String, i64>,
    /// Record lines read from the source, after header skipping.
    pub records_in: usize,
    /// Records dropped under the skip-records strategy. Always 0 under
    /// fail-fast.
    pub records_skipped: usize,
}

/// Drives a full parse -> transform -> key -> group -> count -> reduce run.
pub struct PipelineRunner {
    delimiter: char,
    schema: Arc<SchemaConfig>,
    failure_strategy: FailureStrategy,
    max_concurrency: usize,
}

/// Number of available CPU cores, falling back to 4 if detection fails.
fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl PipelineRunner {
    pub fn new(
        delimiter: char,
        schema: SchemaConfig,
        failure_strategy: FailureStrategy,
        max_concurrency: usize,
    ) -> Self {
        Self {
            delimiter,
            schema: Arc::new(schema),
            failure_strategy,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Build a runner from a validated configuration.
    pub fn from_config(cfg: &PipelineConfig) -> Self {
        Self::new(
            cfg.delimiter_char(),
            cfg.schema.clone(),
            cfg.failure_strategy,
            cfg.max_concurrency.unwrap_or_else(default_concurrency),
        )
    }

    /// Run the pipeline over the given source.
    pub async fn run(&self, source: &TextLineSource) -> Result<PipelineOutcome, ExecutionError> {
        let start = Instant::now();

        let lines = source.read_lines().await?;
        let records_in = lines.len();

        let partitions = partition_lines(lines, self.max_concurrency);
        tracing::info!(
            "{}",
            RunStarted {
                dataset: source.path(),
                partitions: partitions.len(),
            }
        );

        // Map phase: shape each partition on its own task.
        let mut handles = Vec::with_capacity(partitions.len());
        for chunk in partitions {
            let schema = Arc::clone(&self.schema);
            let delimiter = self.delimiter;
            let strategy = self.failure_strategy;
            handles.push(tokio::spawn(async move {
                map_partition(chunk, delimiter, &schema, strategy)
            }));
        }

        let mut keyed = Vec::new();
        let mut records_skipped = 0usize;
        for handle in handles {
            let partition = handle.await.map_err(|e| ExecutionError::Internal {
                message: format!("map worker aborted: {e}"),
            })??;
            keyed.extend(partition.keyed);
            records_skipped += partition.skipped;
        }

        // Group barrier: all records for a region are visible before any
        // counting starts.
        let grouped_records = keyed.len();
        let groups = group_by_key(keyed);
        tracing::debug!(
            "{}",
            GroupBarrierReached {
                groups: groups.len(),
                records: grouped_records,
            }
        );

        // Count + reduce: per-group partial sums, merged in arrival order.
        // The sum is associative and commutative, so the merge order does
        // not affect the result.
        let mut aggregates: HashMap<String, i64> = HashMap::new();
        for group in groups {
            let region = group.key().to_string();
            let mut entries = Vec::with_capacity(group.len());
            for entry in count_cases(group, &self.schema.case_count_field) {
                match entry {
                    Ok(entry) => entries.push(entry),
                    Err(err) => match self.failure_strategy {
                        FailureStrategy::FailFast => {
                            return Err(ExecutionError::GroupedRecordFailed {
                                region,
                                source: err,
                            })
                        }
                        FailureStrategy::SkipRecords => {
                            records_skipped += 1;
                            tracing::warn!(
                                "{}",
                                RecordSkipped {
                                    line: None,
                                    error: &err,
                                }
                            );
                        }
                    },
                }
            }
            merge_partials(&mut aggregates, sum_counts(entries));
        }

        let outcome = PipelineOutcome {
            records_in,
            records_skipped,
            aggregates,
        };
        tracing::info!(
            "{}",
            RunCompleted {
                keys: outcome.aggregates.len(),
                records_in: outcome.records_in,
                records_skipped: outcome.records_skipped,
                elapsed: start.elapsed(),
            }
        );
        Ok(outcome)
    }
}

#[derive(Debug)]
struct MapPartition {
    keyed: Vec<(String, Record)>,
    skipped: usize,
}

/// Shape every line of one partition into a keyed record, applying the
/// failure strategy to per-record errors.
fn map_partition(
    lines: Vec<SourcedLine>,
    delimiter: char,
    schema: &SchemaConfig,
    strategy: FailureStrategy,
) -> Result<MapPartition, ExecutionError> {
    let mut keyed = Vec::with_capacity(lines.len());
    let mut skipped = 0usize;

    for (line_number, text) in lines {
        match shape_record(text, delimiter, schema) {
            Ok(pair) => keyed.push(pair),
            Err(err) => match strategy {
                FailureStrategy::FailFast => {
                    return Err(ExecutionError::RecordFailed {
                        line: line_number,
                        source: err,
                    })
                }
                FailureStrategy::SkipRecords => {
                    skipped += 1;
                    tracing::warn!(
                        "{}",
                        RecordSkipped {
                            line: Some(line_number),
                            error: &err,
                        }
                    );
                }
            },
        }
    }

    Ok(MapPartition { keyed, skipped })
}

/// The per-record transform chain: split -> build -> derive -> key.
fn shape_record(
    text: Result<String, RecordError>,
    delimiter: char,
    schema: &SchemaConfig,
) -> Result<(String, Record), RecordError> {
    let line = text?;
    let fields = split_line(&line, delimiter);
    let record = build_record(&schema.fields, fields);
    let record = derive_period(record, &schema.date_field)?;
    extract_region_key(record, &schema.region_field)
}

/// Split lines into at most `partitions` similarly sized chunks, keeping
/// the original order within each chunk.
fn partition_lines(lines: Vec<SourcedLine>, partitions: usize) -> Vec<Vec<SourcedLine>> {
    let chunk_size = lines.len().div_ceil(partitions.max(1)).max(1);
    let mut chunks = Vec::new();
    let mut iter = lines.into_iter();
    loop {
        let chunk: Vec<_> = iter.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize, text: &str) -> SourcedLine {
        (n, Ok(text.to_string()))
    }

    #[test]
    fn partitions_cover_all_lines_in_order() {
        let lines: Vec<_> = (1..=10).map(|n| line(n, "x")).collect();
        let chunks = partition_lines(lines, 4);

        assert!(chunks.len() <= 4);
        let flattened: Vec<usize> = chunks.into_iter().flatten().map(|(n, _)| n).collect();
        assert_eq!(flattened, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn partitioning_empty_input_yields_no_chunks() {
        assert!(partition_lines(Vec::new(), 4).is_empty());
    }

    #[test]
    fn shape_record_runs_the_full_transform_chain() {
        let schema = SchemaConfig::default();
        let (key, record) = shape_record(
            Ok("1|2016-03-15|5|123|CityA|SP|00000|0.0|0.0".to_string()),
            '|',
            &schema,
        )
        .unwrap();

        assert_eq!(key, "SP");
        assert_eq!(record.get("period"), Some("2016-03"));
        assert_eq!(record.get("casos"), Some("5"));
        assert_eq!(record.get("logitude"), Some("0.0"));
    }

    #[test]
    fn map_partition_fail_fast_reports_the_line() {
        let schema = SchemaConfig::default();
        let lines = vec![
            line(2, "1|2016-03-15|5|123|CityA|SP|00000|0.0|0.0"),
            line(3, "2|20160320|3|123|CityA|SP|00000|0.0|0.0"),
        ];

        let err = map_partition(lines, '|', &schema, FailureStrategy::FailFast).unwrap_err();
        match err {
            ExecutionError::RecordFailed { line, source } => {
                assert_eq!(line, 3);
                assert!(matches!(source, RecordError::MalformedDate { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn map_partition_skip_records_drops_and_counts() {
        let schema = SchemaConfig::default();
        let lines = vec![
            line(2, "1|2016-03-15|5|123|CityA|SP|00000|0.0|0.0"),
            line(3, "2|20160320|3|123|CityA|SP|00000|0.0|0.0"),
            line(4, "3|2016-04-01|2|456|CityB|RJ|00000|0.0|0.0"),
        ];

        let partition =
            map_partition(lines, '|', &schema, FailureStrategy::SkipRecords).unwrap();
        assert_eq!(partition.keyed.len(), 2);
        assert_eq!(partition.skipped, 1);
    }
}
