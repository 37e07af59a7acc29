// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! This module implements the 3-tier configuration loading system:
//! 1. TOML file (base defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::{ConfigError, ConfigResult, TrainLengthConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use train_length_core::Direction;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "train_length.toml";

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "TRAIN_LENGTH_CONFIG_PATH";

/// Find the configuration file
///
/// Search order:
/// 1. `TRAIN_LENGTH_CONFIG_PATH` environment variable
/// 2. Current working directory: `./train_length.toml`
/// 3. Parent directories (up to 5 levels)
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by {} not found: {}",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        for ancestor in cwd.ancestors().skip(1).take(5) {
            search_paths.push(ancestor.join(CONFIG_FILE_NAME));
        }
    }

    if let Some(found) = search_paths.iter().find(|path| path.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "Configuration file '{}' not found in any of these locations:\n{}\n\nSet {} to specify a custom location.",
        CONFIG_FILE_NAME, search_list, CONFIG_PATH_ENV
    )))
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, will search for config file.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if config file is not found or contains invalid TOML.
/// Validation is a separate step, see [`crate::validate_config`].
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<TrainLengthConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: TrainLengthConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `TRAIN_LENGTH_MAX_STEPS` -> `calculator.max_steps`
/// - `TRAIN_LENGTH_INITIAL_DIRECTION` -> `calculator.initial_direction`
/// - `TRAIN_LENGTH_LOG_LEVEL` -> `logging.level`
/// - `TRAIN_LENGTH_LOG_FORMAT` -> `logging.format`
///
/// Values that fail to parse are ignored.
pub fn apply_environment_overrides(config: &mut TrainLengthConfig) {
    let lookup = |key: &str| env::var(key).ok();
    apply_overrides(
        config,
        lookup("TRAIN_LENGTH_MAX_STEPS"),
        lookup("TRAIN_LENGTH_INITIAL_DIRECTION"),
        lookup("TRAIN_LENGTH_LOG_LEVEL"),
        lookup("TRAIN_LENGTH_LOG_FORMAT"),
    );
}

/// Apply CLI argument overrides to configuration
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - Map of CLI arguments, keys `max_steps`, `initial_direction`,
///   `log_level`, `log_format` (e.g. `{"max_steps": "1000"}`)
pub fn apply_cli_overrides(config: &mut TrainLengthConfig, cli_args: &HashMap<String, String>) {
    apply_overrides(
        config,
        cli_args.get("max_steps").cloned(),
        cli_args.get("initial_direction").cloned(),
        cli_args.get("log_level").cloned(),
        cli_args.get("log_format").cloned(),
    );
}

fn apply_overrides(
    config: &mut TrainLengthConfig,
    max_steps: Option<String>,
    initial_direction: Option<String>,
    log_level: Option<String>,
    log_format: Option<String>,
) {
    if let Some(steps) = max_steps.and_then(|v| v.trim().parse::<u64>().ok()) {
        config.calculator.max_steps = steps;
    }
    if let Some(direction) = initial_direction.and_then(|v| v.parse::<Direction>().ok()) {
        config.calculator.initial_direction = direction;
    }
    if let Some(level) = log_level {
        config.logging.level = level.to_lowercase();
    }
    if let Some(format) = log_format {
        config.logging.format = format.to_lowercase();
    }
}
