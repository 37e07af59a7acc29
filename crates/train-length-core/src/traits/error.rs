// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for building trains

use core::fmt;

/// Train construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainError {
    /// A train needs at least one wagon
    Empty,

    /// More wagons requested than a fixed-capacity train can hold
    CapacityExceeded {
        /// Requested wagon count
        requested: usize,
        /// Available capacity
        capacity: usize,
    },
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainError::Empty => write!(f, "A train must have at least one wagon"),
            TrainError::CapacityExceeded { requested, capacity } => {
                write!(
                    f,
                    "Capacity exceeded: requested {} wagons, capacity {}",
                    requested, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TrainError {}

/// Result type for train operations
pub type Result<T> = core::result::Result<T, TrainError>;
