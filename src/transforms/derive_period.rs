use crate::config::consts::PERIOD_FIELD;
use crate::errors::RecordError;
use crate::model::Record;

/// Derive the year-month period from the record's date field and return a
/// new record carrying it under `period`.
///
/// The date is taken as `-`-separated segments; the period is the first two
/// joined back with `-`, so `2016-03-15` yields `2016-03`. Anything with
/// fewer than two segments has no month component and is rejected as
/// `MalformedDate`; an absent date field is `MissingField`.
///
/// The input record is consumed and an extended one returned, so no stage
/// ever observes a half-derived record.
pub fn derive_period(record: Record, date_field: &str) -> Result<Record, RecordError> {
    let date = record.require(date_field)?.to_string();

    let mut segments = date.split('-');
    let period = match (segments.next(), segments.next()) {
        (Some(year), Some(month)) => format!("{year}-{month}"),
        _ => return Err(RecordError::MalformedDate { value: date }),
    };

    Ok(record.with_field(PERIOD_FIELD, period))
}
