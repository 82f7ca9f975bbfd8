// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Terminal sinks for aggregated results.
//!
//! A sink is a plain consumer contract: it accepts a stream of
//! `(composite key, summed count)` pairs with no ordering guarantee. The
//! binary sorts before emitting purely for readable output; nothing here
//! relies on order.

use async_trait::async_trait;
use serde::Serialize;

/// Consumer of aggregated `(key, count)` pairs.
#[async_trait]
pub trait ResultSink: Send {
    async fn emit(&mut self, key: &str, count: i64);
}

/// Prints one `key: count` line per pair.
pub struct StdoutSink;

#[async_trait]
impl ResultSink for StdoutSink {
    async fn emit(&mut self, key: &str, count: i64) {
        println!("{key}: {count}");
    }
}

#[derive(Serialize)]
struct JsonResult<'a> {
    key: &'a str,
    count: i64,
}

/// Prints one JSON object per pair, for piping into other tools.
pub struct JsonLinesSink;

#[async_trait]
impl ResultSink for JsonLinesSink {
    async fn emit(&mut self, key: &str, count: i64) {
        let result = JsonResult { key, count };
        match serde_json::to_string(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!("failed to serialize result for '{}': {}", key, e),
        }
    }
}

/// Collects emitted pairs in memory. Test support.
#[derive(Default)]
pub struct CollectSink {
    pub emitted: Vec<(String, i64)>,
}

#[async_trait]
impl ResultSink for CollectSink {
    async fn emit(&mut self, key: &str, count: i64) {
        self.emitted.push((key.to_string(), count));
    }
}
