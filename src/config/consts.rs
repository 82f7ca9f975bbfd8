// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in defaults for the pipeline configuration.
//!
//! The defaults describe the dengue incidence dataset the pipeline was built
//! around: nine `|`-separated columns with one header line. A config file
//! only has to name the source path; everything else falls back to these.

/// Default field delimiter.
pub const DEFAULT_DELIMITER: &str = "|";

/// Default number of header lines the source skips.
pub const DEFAULT_SKIP_HEADER_LINES: usize = 1;

/// Default column layout of the incidence dataset, in source order.
///
/// `logitude` is a misspelling carried by the dataset itself; renaming it
/// would change the field-name contract of every record, so it stays.
pub const DEFAULT_SCHEMA_FIELDS: [&str; 9] = [
    "id",
    "data_iniSE",
    "casos",
    "ibge_code",
    "cidade",
    "uf",
    "cep",
    "latitude",
    "logitude",
];

/// Default field holding the incidence start date (`YYYY-MM-DD`).
pub const DEFAULT_DATE_FIELD: &str = "data_iniSE";

/// Default field holding the case count.
pub const DEFAULT_CASE_COUNT_FIELD: &str = "casos";

/// Default field holding the region code used as grouping key.
pub const DEFAULT_REGION_FIELD: &str = "uf";

/// Name of the derived year-month field added by the period deriver.
pub const PERIOD_FIELD: &str = "period";
