// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The case counter: re-keys every record of a region group by
//! `(region, period)` and surfaces its case count for summation.

use crate::config::consts::PERIOD_FIELD;
use crate::errors::RecordError;
use crate::model::{CountEntry, GroupedRecords};

/// Emit one `CountEntry` per record in the group, lazily, in group order.
///
/// The entry key is `region + "-" + period` and the value is the record's
/// case count parsed as a base-10 `i64`. Duplicate keys across records are
/// expected and intentional; the reducer sums them. The group is consumed by
/// value, so the sequence can only be walked once.
///
/// An absent or non-numeric case count yields `InvalidCaseCount` for that
/// record. Absence is folded into the same error kind on purpose: a record
/// without a count must never quietly contribute zero.
pub fn count_cases(
    group: GroupedRecords,
    case_count_field: &str,
) -> impl Iterator<Item = Result<CountEntry, RecordError>> + '_ {
    let (region, records) = group.into_parts();
    records.into_iter().map(move |record| {
        let period = record.require(PERIOD_FIELD)?.to_string();
        let raw = record.get(case_count_field).unwrap_or_default();
        let count = raw
            .parse::<i64>()
            .map_err(|_| RecordError::InvalidCaseCount {
                value: raw.to_string(),
            })?;
        Ok(CountEntry::new(format!("{region}-{period}"), count))
    })
}
