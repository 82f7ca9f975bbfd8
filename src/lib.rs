// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // config + validation
pub mod engine;     // pipeline harness: group barrier, counting, reduction
pub mod errors;     // error handling
pub mod model;      // record and keyed-value types
pub mod observability;
pub mod sink;       // result sinks
pub mod source;     // dataset line source
pub mod transforms; // per-record transforms
