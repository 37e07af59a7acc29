// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # train-length
//!
//! Measures a circular train of wagons when all you can do is walk it one
//! wagon at a time and switch lamps on and off.
//!
//! ## Quick Start
//!
//! ```rust
//! use train_length::prelude::*;
//!
//! let mut train = RingTrain::with_length(42).unwrap();
//! let mut calculator = LengthCalculator::new(&mut train);
//! assert_eq!(calculator.length(), 42);
//! ```
//!
//! ## Feature Flags
//!
//! - **`observability`** (default): logging setup via `tracing-subscriber`
//! - **`file-logging`**: JSON log file per run (implies `observability`)
//! - **`embedded`**: `FixedTrain<N>`, a train with no heap allocation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Foundation: train-length-core, train-length-config     │
//! │  (Wagon/Train traits, ring trains, TOML config)         │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Algorithm: train-length-calculator                     │
//! │  (lamp-marking scan, memoized length)                   │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Infrastructure: train-length-observability             │
//! │  (tracing subscriber, debug flags)                      │
//! └─────────────────────────────────────────────────────────┘
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use train_length_calculator as calculator;
pub use train_length_config as config;
pub use train_length_core as model;

#[cfg(feature = "observability")]
pub use train_length_observability as observability;

use train_length_calculator::LengthCalculator;
use train_length_config::TrainLengthConfig;
use train_length_core::Train;

/// Calculator for `train`, configured from the `[calculator]` section
pub fn calculator_from_config<T: Train>(
    train: T,
    config: &TrainLengthConfig,
) -> LengthCalculator<T> {
    tracing::debug!(
        "[TRAIN-LENGTH] Calculator configured: first pass {}, step budget {}",
        config.calculator.initial_direction,
        config.calculator.max_steps
    );
    LengthCalculator::with_config(train, &config.calculator)
}

/// Logging options from the `[logging]` section
///
/// Debug crates listed in the file are merged with `--debug-*` arguments and
/// `TRAIN_LENGTH_DEBUG`.
///
/// # Errors
///
/// Fails on an unknown `logging.format`.
#[cfg(feature = "observability")]
pub fn logging_options(
    config: &TrainLengthConfig,
) -> anyhow::Result<train_length_observability::LoggingOptions> {
    use train_length_observability::{parse_debug_flags, CrateDebugFlags, LogFormat};

    let format: LogFormat = config
        .logging
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let mut debug_flags = CrateDebugFlags::from_names(&config.logging.debug_crates);
    debug_flags.merge(parse_debug_flags());

    Ok(train_length_observability::LoggingOptions {
        level: config.logging.level.clone(),
        format,
        debug_flags,
        log_dir: config.logging.log_dir.clone(),
    })
}

/// Validate `config` and install logging from it
///
/// # Errors
///
/// Fails if the configuration is invalid or logging cannot be installed.
#[cfg(feature = "observability")]
pub fn init_from_config(
    config: &TrainLengthConfig,
) -> anyhow::Result<train_length_observability::LoggingGuard> {
    use anyhow::Context;

    train_length_config::validate_config(config).context("Invalid train-length configuration")?;
    train_length_observability::init_logging(&logging_options(config)?)
}

/// Commonly used items
pub mod prelude {
    pub use train_length_calculator::{
        CalculateLength, CalculatorError, LengthCalculator, ScanReport,
    };
    pub use train_length_config::{CalculatorConfig, TrainLengthConfig};
    pub use train_length_core::{Direction, LampWagon, RingTrain, Train, TrainError, Wagon};

    #[cfg(feature = "embedded")]
    pub use train_length_core::FixedTrain;
}
