use crate::model::{FieldList, Record};
use std::collections::HashMap;

/// Zip the fixed ordered schema with a field list into a named-field record.
///
/// Pairing stops at the shorter sequence: a short field list leaves the
/// trailing schema names absent from the record, and extra values beyond the
/// schema are silently dropped. Callers must not assume every schema field
/// is present. No numeric parsing happens here; all values stay strings.
pub fn build_record(schema: &[String], fields: FieldList) -> Record {
    let mapping: HashMap<String, String> = schema
        .iter()
        .cloned()
        .zip(fields.0)
        .collect();
    Record::new(mapping)
}
