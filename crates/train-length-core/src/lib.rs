// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Train Length Core
//!
//! Capability traits for a circular train of wagons, plus the train
//! topologies shipped with the workspace.
//!
//! This crate provides:
//! - **Traits** (always available): `Wagon`, `Train`, `Direction`
//! - **Std Implementation** (behind `std` feature): `RingTrain`, Vec-backed
//! - **Embedded Implementation** (behind `embedded` feature): `FixedTrain<N>`,
//!   array-backed with no heap allocation
//!
//! ## Features
//!
//! - `default` = `["std"]`
//! - `std` = Vec-backed ring train
//! - `embedded` = fixed-capacity train for no_std targets
//! - `serde` = `Serialize`/`Deserialize` for `Direction`
//!
//! ## Usage
//!
//! ```rust
//! use train_length_core::{RingTrain, Train, Wagon};
//!
//! let mut train = RingTrain::with_length(3).unwrap();
//! train.wagon_at(0).set_lamp();
//! assert!(!train.next().lamp_is_on());
//! assert!(!train.next().lamp_is_on());
//! assert!(train.next().lamp_is_on());
//! ```
//!
//! ### Custom topologies
//!
//! Anything that can move a cursor one wagon at a time around a ring can
//! implement [`Train`]: simulated hardware, a linked ring, a remote proxy.
//! The cursor position stays private to the implementation.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Traits module (always available)
pub mod traits;
pub mod wagon;

pub use traits::{Direction, ParseDirectionError, Result, Train, TrainError, Wagon};
pub use wagon::LampWagon;

// Standard library implementation (behind "std" feature)
#[cfg(feature = "std")]
pub mod std_impl;

#[cfg(feature = "std")]
pub use std_impl::RingTrain;

// Embedded implementation (behind "embedded" feature)
#[cfg(feature = "embedded")]
pub mod embedded_impl;

#[cfg(feature = "embedded")]
pub use embedded_impl::FixedTrain;
