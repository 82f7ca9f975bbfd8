use crate::errors::RecordError;
use crate::model::Record;

/// Project a record down to its grouping key: `(region code, record)`.
///
/// Pure projection; the record passes through unchanged. `MissingField` when
/// the region field is absent.
pub fn extract_region_key(
    record: Record,
    region_field: &str,
) -> Result<(String, Record), RecordError> {
    let key = record.require(region_field)?.to_string();
    Ok((key, record))
}
