// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! Checks that values are within their accepted sets and ranges. All problems
//! are collected and reported together.

use crate::{ConfigError, ConfigResult, TrainLengthConfig};

/// Accepted values for `logging.level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Accepted values for `logging.format`
pub const LOG_FORMATS: &[&str] = &["text", "json"];

/// Smallest non-zero step budget that lets a one-wagon train finish
/// (one scan step plus one rewind step).
pub const MIN_STEP_BUDGET: u64 = 2;

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - `calculator.max_steps` is 0 (unbounded) or at least [`MIN_STEP_BUDGET`]
/// - `logging.level` and `logging.format` are known values
/// - `logging.debug_crates` has no blank entries
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` with details if validation fails
pub fn validate_config(config: &TrainLengthConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_calculator(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_calculator(config: &TrainLengthConfig, errors: &mut Vec<ConfigValidationError>) {
    let max_steps = config.calculator.max_steps;
    if max_steps != 0 && max_steps < MIN_STEP_BUDGET {
        errors.push(ConfigValidationError::InvalidValue {
            field: "calculator.max_steps".to_string(),
            reason: format!("must be 0 (unbounded) or at least {}", MIN_STEP_BUDGET),
        });
    }
}

fn validate_logging(config: &TrainLengthConfig, errors: &mut Vec<ConfigValidationError>) {
    let logging = &config.logging;

    if logging.level.is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "logging.level".to_string(),
        });
    } else if !LOG_LEVELS.contains(&logging.level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("must be one of: {}", LOG_LEVELS.join(", ")),
        });
    }

    if !LOG_FORMATS.contains(&logging.format.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.format".to_string(),
            reason: format!("must be one of: {}", LOG_FORMATS.join(", ")),
        });
    }

    if logging.debug_crates.iter().any(|name| name.trim().is_empty()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.debug_crates".to_string(),
            reason: "crate names must not be blank".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&TrainLengthConfig::default()).is_ok());
    }

    #[test]
    fn test_budget_of_one_is_rejected() {
        let mut config = TrainLengthConfig::default();
        config.calculator.max_steps = 1;

        let result = validate_config(&config);
        assert!(
            matches!(result, Err(ConfigError::ValidationError(msg)) if msg.contains("calculator.max_steps"))
        );

        config.calculator.max_steps = MIN_STEP_BUDGET;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_unknown_log_level() {
        let mut config = TrainLengthConfig::default();
        config.logging.level = "verbose".to_string();

        let result = validate_config(&config);
        assert!(
            matches!(result, Err(ConfigError::ValidationError(msg)) if msg.contains("logging.level") && msg.contains("trace"))
        );
    }

    #[test]
    fn test_missing_log_level() {
        let mut config = TrainLengthConfig::default();
        config.logging.level = String::new();

        let result = validate_config(&config);
        assert!(
            matches!(result, Err(ConfigError::ValidationError(msg)) if msg.contains("Missing required"))
        );
    }

    #[test]
    fn test_all_problems_are_reported() {
        let mut config = TrainLengthConfig::default();
        config.calculator.max_steps = 1;
        config.logging.format = "xml".to_string();
        config.logging.debug_crates = vec![" ".to_string()];

        match validate_config(&config) {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("calculator.max_steps"));
                assert!(msg.contains("logging.format"));
                assert!(msg.contains("logging.debug_crates"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
