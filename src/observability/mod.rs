// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Centralized message types for the pipeline's diagnostic and operational
//! logging. Message types follow a struct-based pattern with a `Display`
//! implementation to keep magic strings out of the rest of the codebase and
//! keep log output consistent.

pub mod messages;
