// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # train-length-observability
//!
//! Logging setup shared by every train-length binary and test harness.
//!
//! Library crates only emit `tracing` events; this crate decides where they
//! go. Per-crate debug flags raise individual crates to `debug` without
//! flooding the rest.
//!
//! ## Features
//! - `file-logging`: JSON log file per run, next to console output

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

// Re-export commonly used items
pub use cli::*;
pub use config::*;
pub use init::*;

/// Workspace crate names accepted by debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "train-length",
    "train-length-core",
    "train-length-calculator",
    "train-length-config",
    "train-length-observability",
];
