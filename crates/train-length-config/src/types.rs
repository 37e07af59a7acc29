// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! This module defines the structs that map to sections in
//! `train_length.toml`:
//!
//! ```toml
//! [calculator]
//! max_steps = 0                 # 0 = unbounded
//! initial_direction = "backward"
//!
//! [logging]
//! level = "info"
//! format = "text"
//! debug_crates = ["train-length-calculator"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use train_length_core::Direction;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrainLengthConfig {
    pub calculator: CalculatorConfig,
    pub logging: LoggingConfig,
}

/// Length calculator settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Upper bound on relative moves per calculation (0 = unbounded)
    ///
    /// A train that breaks the ring contract never lets the scan terminate;
    /// a non-zero budget turns that into an error instead.
    pub max_steps: u64,

    /// Direction of the first scan pass
    pub initial_direction: Direction,
}

impl CalculatorConfig {
    /// The step budget, if one is set
    pub fn step_budget(&self) -> Option<u64> {
        (self.max_steps > 0).then_some(self.max_steps)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error
    pub level: String,
    /// text or json
    pub format: String,
    /// Crates logged at debug level regardless of `level`
    pub debug_crates: Vec<String>,
    /// Directory for file logs (requires the `file-logging` feature of the
    /// observability crate)
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            debug_crates: Vec::new(),
            log_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let config: TrainLengthConfig = toml::from_str(
            r#"
            [calculator]
            max_steps = 500
            initial_direction = "forward"

            [logging]
            level = "debug"
            format = "json"
            debug_crates = ["train-length-calculator"]
            log_dir = "/tmp/train-length-logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.calculator.step_budget(), Some(500));
        assert_eq!(config.calculator.initial_direction, Direction::Forward);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.debug_crates, vec!["train-length-calculator"]);
        assert_eq!(
            config.logging.log_dir,
            Some(PathBuf::from("/tmp/train-length-logs"))
        );
    }

    #[test]
    fn test_zero_budget_means_unbounded() {
        assert_eq!(CalculatorConfig::default().step_budget(), None);
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let result = toml::from_str::<TrainLengthConfig>(
            "[calculator]\ninitial_direction = \"sideways\"\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = TrainLengthConfig::default();
        config.calculator.max_steps = 64;
        let text = toml::to_string(&config).unwrap();
        let parsed: TrainLengthConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
