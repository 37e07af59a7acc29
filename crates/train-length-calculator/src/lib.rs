// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Train Length Calculator
//!
//! Measures a circular train that can only be explored one wagon at a time.
//!
//! The calculator never sees positions or wagon counts. It marks wagons by
//! switching their lamps on and off and moves the train's cursor with
//! `next` / `previous`, bouncing between lit wagons until the anchor lamp it
//! switched on at the start is the one it finds again.
//!
//! ## Usage
//!
//! ```rust
//! use train_length_calculator::{CalculateLength, LengthCalculator};
//! use train_length_config::CalculatorConfig;
//! use train_length_core::{Direction, RingTrain};
//!
//! let mut train = RingTrain::from_lamps([false, true, true, false, true]).unwrap();
//! let config = CalculatorConfig {
//!     max_steps: 10_000,
//!     initial_direction: Direction::Forward,
//! };
//!
//! let mut calculator = LengthCalculator::with_config(&mut train, &config);
//! assert_eq!(calculator.length(), 5);
//!
//! let report = calculator.report().unwrap();
//! assert!(report.passes <= 5);
//! ```
//!
//! ## Logging
//!
//! Logs through `tracing` with the `[TRAIN-LENGTH]` tag: `info` for the
//! result, `debug` for every scan pass, `warn`/`error` when a step budget
//! runs out.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod calculator;
pub mod error;

pub use calculator::{CalculateLength, LengthCalculator, ScanReport};
pub use error::{CalculatorError, Result};
