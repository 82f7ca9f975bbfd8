//! Per-record transforms: split, build, derive, key.
//!
//! Every function here is pure and touches exactly one record, so the runner
//! may apply them to different records on different tasks in any order.

mod build_record;
mod derive_period;
mod extract_key;
mod split_line;

pub use build_record::build_record;
pub use derive_period::derive_period;
pub use extract_key::extract_region_key;
pub use split_line::split_line;
