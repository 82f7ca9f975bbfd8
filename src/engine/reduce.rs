// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-key reduction: summing case counts that share a composite key.
//!
//! The sum is associative and commutative over `i64`, so partial results
//! from different partitions can be folded in any order and merged at the
//! end without changing the outcome. Counts use `i64` because case totals
//! have no natural upper bound.

use crate::model::CountEntry;
use std::collections::HashMap;

/// Fold count entries into a per-key sum. Identity is the empty map; a key
/// never seen sums from 0.
pub fn sum_counts(entries: impl IntoIterator<Item = CountEntry>) -> HashMap<String, i64> {
    let mut sums: HashMap<String, i64> = HashMap::new();
    for entry in entries {
        *sums.entry(entry.key).or_insert(0) += entry.count;
    }
    sums
}

/// Merge one partition's partial sums into an accumulator.
pub fn merge_partials(total: &mut HashMap<String, i64>, partial: HashMap<String, i64>) {
    for (key, count) in partial {
        *total.entry(key).or_insert(0) += count;
    }
}
