// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Train Length - Embedded (RTOS, no_std)
//!
//! Train topology for targets without a heap.
//!
//! ## Features
//! - ✅ `no_std` compatible
//! - ✅ Fixed-size arrays (no heap allocation)
//! - ✅ Capacity chosen at compile time
//!
//! This module is only available when the `embedded` feature is enabled.

pub mod fixed_train;

pub use fixed_train::FixedTrain;
