//! Value types flowing through the aggregation pipeline.
//!
//! Each stage owns its output until it hands it to the next stage. `Record`
//! is immutable once built; derivation produces a new `Record` value rather
//! than mutating a shared one, so per-record work can run on any task with
//! no aliasing.

use crate::errors::RecordError;
use std::collections::HashMap;

/// Ordered field values split out of one raw line, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldList(pub Vec<String>);

impl FieldList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for FieldList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

/// One parsed record: a mapping from schema field name to string value.
///
/// Built by zipping the schema with a [`FieldList`]; if the list was shorter
/// than the schema, the trailing fields are simply absent. All values stay
/// strings until the case counter parses the count.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(HashMap<String, String>);

impl Record {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    /// Look up a field value, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Look up a field value, raising `MissingField` when absent.
    pub fn require(&self, field: &str) -> Result<&str, RecordError> {
        self.get(field).ok_or_else(|| RecordError::MissingField {
            field: field.to_string(),
        })
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return a new record with one additional field.
    ///
    /// Consumes the receiver, so the old value cannot be observed afterwards.
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }
}

/// All records sharing one region key, collected at the group barrier.
///
/// The record sequence is consumed by value exactly once; downstream stages
/// must not assume re-iterability.
#[derive(Debug)]
pub struct GroupedRecords {
    key: String,
    records: Vec<Record>,
}

impl GroupedRecords {
    pub fn new(key: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            key: key.into(),
            records,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tear the group apart into its key and record sequence.
    pub fn into_parts(self) -> (String, Vec<Record>) {
        (self.key, self.records)
    }
}

/// One `(composite key, case count)` pair emitted by the case counter.
///
/// The composite key is `region + "-" + period`. Duplicate keys across
/// entries are expected; the reducer sums them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry {
    pub key: String,
    pub count: i64,
}

impl CountEntry {
    pub fn new(key: impl Into<String>, count: i64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_returns_extended_record() {
        let record = Record::new(HashMap::from([(
            "uf".to_string(),
            "SP".to_string(),
        )]));
        let extended = record.with_field("period", "2016-03");

        assert_eq!(extended.get("uf"), Some("SP"));
        assert_eq!(extended.get("period"), Some("2016-03"));
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn require_reports_the_missing_field_name() {
        let record = Record::new(HashMap::new());
        let err = record.require("casos").unwrap_err();
        assert_eq!(
            err,
            crate::errors::RecordError::MissingField {
                field: "casos".to_string()
            }
        );
    }

    #[test]
    fn grouped_records_hand_back_key_and_records() {
        let group = GroupedRecords::new("SP", vec![Record::new(HashMap::new())]);
        assert_eq!(group.key(), "SP");
        assert_eq!(group.len(), 1);

        let (key, records) = group.into_parts();
        assert_eq!(key, "SP");
        assert_eq!(records.len(), 1);
    }
}
