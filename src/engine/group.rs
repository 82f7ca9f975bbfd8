// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The group barrier: every keyed record for a region must be collected here
//! before any counting starts.

use crate::model::{GroupedRecords, Record};
use std::collections::HashMap;

/// Collect keyed records into one group per region.
///
/// Accepts keyed records from any number of map partitions in any order;
/// within a group, records keep the order they arrived in. Group ordering in
/// the returned vector is unspecified.
pub fn group_by_key(keyed: impl IntoIterator<Item = (String, Record)>) -> Vec<GroupedRecords> {
    let mut groups: HashMap<String, Vec<Record>> = HashMap::new();
    for (key, record) in keyed {
        groups.entry(key).or_default().push(record);
    }
    groups
        .into_iter()
        .map(|(key, records)| GroupedRecords::new(key, records))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap as Map;

    fn record(id: &str) -> Record {
        Record::new(Map::from([("id".to_string(), id.to_string())]))
    }

    #[test]
    fn collects_all_records_per_key() {
        let keyed = vec![
            ("SP".to_string(), record("1")),
            ("RJ".to_string(), record("2")),
            ("SP".to_string(), record("3")),
        ];

        let mut groups = group_by_key(keyed);
        groups.sort_by(|a, b| a.key().cmp(b.key()));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key(), "RJ");
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[1].key(), "SP");
        assert_eq!(groups[1].len(), 2);
    }

    #[test]
    fn preserves_arrival_order_within_a_group() {
        let keyed = vec![
            ("SP".to_string(), record("1")),
            ("SP".to_string(), record("2")),
            ("SP".to_string(), record("3")),
        ];

        let groups = group_by_key(keyed);
        let (_, records) = groups.into_iter().next().unwrap().into_parts();
        let ids: Vec<_> = records.iter().map(|r| r.get("id").unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_key(Vec::new()).is_empty());
    }
}
