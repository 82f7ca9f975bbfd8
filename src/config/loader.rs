// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_CASE_COUNT_FIELD, DEFAULT_DATE_FIELD, DEFAULT_DELIMITER, DEFAULT_REGION_FIELD,
    DEFAULT_SCHEMA_FIELDS, DEFAULT_SKIP_HEADER_LINES,
};
use crate::errors::FailureStrategy;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for one aggregation run.
///
/// Loaded from a YAML file. Only `source.path` is mandatory; the delimiter,
/// failure strategy, concurrency and schema all default to the dengue
/// dataset layout in [`crate::config::consts`].
///
/// # Example
/// ```yaml
/// source:
///   path: data/casos_dengue.txt
///   skip_header_lines: 1
/// delimiter: "|"
/// failure_strategy: fail_fast
/// max_concurrency: 4
/// schema:
///   fields: [id, data_iniSE, casos, ibge_code, cidade, uf, cep, latitude, logitude]
///   date_field: data_iniSE
///   case_count_field: casos
///   region_field: uf
/// ```
#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    pub source: SourceConfig,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    /// Maximum number of concurrent map-phase tasks. Defaults to the number
    /// of available CPU cores when absent.
    #[serde(default)]
    pub max_concurrency: Option<usize>,
    #[serde(default)]
    pub schema: SchemaConfig,
}

impl PipelineConfig {
    /// The delimiter as a single character. Valid only after validation has
    /// confirmed the configured string is exactly one char.
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or('|')
    }
}

/// Where the dataset lives and how many header lines to skip before the
/// first record.
#[derive(Debug, Deserialize)]
pub struct SourceConfig {
    pub path: PathBuf,
    #[serde(default = "default_skip_header_lines")]
    pub skip_header_lines: usize,
}

/// The fixed, ordered record schema plus the three field roles the pipeline
/// reads: the date field (period derivation), the case-count field (values
/// to sum) and the region field (grouping key).
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    #[serde(default = "default_schema_fields")]
    pub fields: Vec<String>,
    #[serde(default = "default_date_field")]
    pub date_field: String,
    #[serde(default = "default_case_count_field")]
    pub case_count_field: String,
    #[serde(default = "default_region_field")]
    pub region_field: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            fields: default_schema_fields(),
            date_field: default_date_field(),
            case_count_field: default_case_count_field(),
            region_field: default_region_field(),
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

fn default_skip_header_lines() -> usize {
    DEFAULT_SKIP_HEADER_LINES
}

fn default_schema_fields() -> Vec<String> {
    DEFAULT_SCHEMA_FIELDS.iter().map(|f| f.to_string()).collect()
}

fn default_date_field() -> String {
    DEFAULT_DATE_FIELD.to_string()
}

fn default_case_count_field() -> String {
    DEFAULT_CASE_COUNT_FIELD.to_string()
}

fn default_region_field() -> String {
    DEFAULT_REGION_FIELD.to_string()
}

/// Load a config from a YAML file without validating it.
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<PipelineConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let cfg: PipelineConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file.
///
/// Validation failures are collected and reported together so a broken
/// config surfaces every problem in one run.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> anyhow::Result<PipelineConfig> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_config(&cfg) {
        let error_messages: Vec<String> =
            validation_errors.iter().map(|e| e.to_string()).collect();
        anyhow::bail!(
            "configuration validation failed:\n{}",
            error_messages.join("\n")
        );
    }

    Ok(cfg)
}
