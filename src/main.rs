// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use caseflow::config::load_and_validate_config;
use caseflow::engine::PipelineRunner;
use caseflow::sink::{JsonLinesSink, ResultSink, StdoutSink};
use caseflow::source::TextLineSource;
use std::env;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <config.yaml> [dataset.txt] [--json]");
    eprintln!("Example: {program} configs/dengue-aggregation.yaml");
    eprintln!("Example: {program} configs/dengue-aggregation.yaml data/casos_dengue.txt --json");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("caseflow");

    let json_output = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| *a != "--json").collect();

    let (config_file, dataset_override) = match positional.as_slice() {
        [config] => (config.as_str(), None),
        [config, dataset] => (config.as_str(), Some(dataset.as_str())),
        _ => {
            print_usage(program);
            std::process::exit(1);
        }
    };

    match run(config_file, dataset_override, json_output).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("caseflow: {e:#}");
            std::process::exit(1);
        }
    }
}

async fn run(
    config_file: &str,
    dataset_override: Option<&str>,
    json_output: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_and_validate_config(config_file)?;
    if let Some(dataset) = dataset_override {
        config.source.path = dataset.into();
    }

    let source = TextLineSource::new(&config.source.path, config.source.skip_header_lines);
    let runner = PipelineRunner::from_config(&config);
    let outcome = runner.run(&source).await?;

    // Sorted purely for readable output; the sink contract is unordered.
    let mut results: Vec<(&String, &i64)> = outcome.aggregates.iter().collect();
    results.sort_by(|a, b| a.0.cmp(b.0));

    let mut sink: Box<dyn ResultSink> = if json_output {
        Box::new(JsonLinesSink)
    } else {
        Box::new(StdoutSink)
    };
    for (key, count) in results {
        sink.emit(key, *count).await;
    }

    eprintln!(
        "{} keys from {} records ({} skipped) in {:?}",
        outcome.aggregates.len(),
        outcome.records_in,
        outcome.records_skipped,
        start.elapsed()
    );

    Ok(())
}
