// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Capability traits for circular trains
//!
//! The length calculator only ever talks to a train through these traits:
//! - [`Wagon`]: one lamp bit per wagon
//! - [`Train`]: a cursor that moves one wagon at a time around the ring
//!
//! Concrete topologies live in `std_impl` and `embedded_impl`.

pub mod direction;
pub mod error;
pub mod train;

// Re-export key types
pub use direction::{Direction, ParseDirectionError};
pub use error::{Result, TrainError};
pub use train::{Train, Wagon};
