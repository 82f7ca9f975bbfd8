// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for the aggregation pipeline.
//!
//! Checks run in a fixed order and all failures are collected rather than
//! stopping at the first, so a broken config reports every problem at once:
//!
//! 1. The delimiter is exactly one character
//! 2. The schema is non-empty and free of duplicate field names
//! 3. No schema field collides with the derived `period` field
//! 4. The date, case-count and region roles each name a schema field

use crate::config::consts::PERIOD_FIELD;
use crate::config::loader::PipelineConfig;
use crate::errors::ValidationError;
use std::collections::HashSet;

/// Validate a loaded configuration, collecting every failure.
pub fn validate_config(cfg: &PipelineConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if cfg.delimiter.chars().count() != 1 {
        errors.push(ValidationError::InvalidDelimiter {
            delimiter: cfg.delimiter.clone(),
        });
    }

    if cfg.schema.fields.is_empty() {
        errors.push(ValidationError::EmptySchema);
    }

    let mut seen = HashSet::new();
    for field in &cfg.schema.fields {
        if !seen.insert(field.as_str()) {
            errors.push(ValidationError::DuplicateField {
                field: field.clone(),
            });
        }
        if field == PERIOD_FIELD {
            errors.push(ValidationError::ReservedFieldName {
                field: field.clone(),
            });
        }
    }

    for (role, field) in [
        ("date field", &cfg.schema.date_field),
        ("case-count field", &cfg.schema.case_count_field),
        ("region field", &cfg.schema.region_field),
    ] {
        if !seen.contains(field.as_str()) {
            errors.push(ValidationError::UnknownFieldReference {
                role,
                field: field.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(yaml: &str) -> PipelineConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = config_from("source:\n  path: data/casos_dengue.txt\n");
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn rejects_multi_char_delimiter() {
        let cfg = config_from(
            "source:\n  path: x.txt\ndelimiter: \"--\"\n",
        );
        let errors = validate_config(&cfg).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidDelimiter {
            delimiter: "--".to_string()
        }));
    }

    #[test]
    fn rejects_empty_schema_and_dangling_roles() {
        let cfg = config_from(
            "source:\n  path: x.txt\nschema:\n  fields: []\n",
        );
        let errors = validate_config(&cfg).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptySchema));
        // With no fields at all, every default role is dangling too.
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::UnknownFieldReference { role: "region field", .. }
        )));
    }

    #[test]
    fn rejects_duplicate_field_names() {
        let cfg = config_from(
            "source:\n  path: x.txt\nschema:\n  fields: [id, data_iniSE, casos, uf, uf]\n",
        );
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateField {
                field: "uf".to_string()
            }]
        );
    }

    #[test]
    fn rejects_reserved_period_field() {
        let cfg = config_from(
            "source:\n  path: x.txt\nschema:\n  fields: [id, data_iniSE, casos, uf, period]\n",
        );
        let errors = validate_config(&cfg).unwrap_err();
        assert!(errors.contains(&ValidationError::ReservedFieldName {
            field: "period".to_string()
        }));
    }

    #[test]
    fn rejects_role_not_in_schema() {
        let cfg = config_from(
            "source:\n  path: x.txt\nschema:\n  fields: [id, date, count]\n  date_field: date\n  case_count_field: count\n  region_field: uf\n",
        );
        let errors = validate_config(&cfg).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownFieldReference {
                role: "region field",
                field: "uf".to_string()
            }]
        );
    }
}
