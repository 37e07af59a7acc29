// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Train Length - Standard (Desktop/Server)
//!
//! Train topology for environments with a heap.
//!
//! ## Features
//! - ✅ Dynamic allocation (`Vec`)
//! - ✅ Any train length that fits in memory
//! - ✅ Move counter for inspecting traversal cost
//!
//! This module is only available when the `std` feature is enabled.

pub mod ring_train;

pub use ring_train::RingTrain;
