// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Vec-backed ring train
//!
//! Wagons live in a contiguous `Vec`; the cursor is an index that wraps at
//! both ends.

use crate::traits::{Result, Train, TrainError, Wagon};
use crate::wagon::LampWagon;
use std::vec::Vec;

/// Circular train backed by a `Vec`
///
/// The cursor starts on wagon 0. Every call to `next` or `previous` counts
/// as one move; see [`RingTrain::moves`].
///
/// # Example
/// ```
/// use train_length_core::{RingTrain, Train, Wagon};
///
/// let mut train = RingTrain::from_lamps([false, true]).unwrap();
/// assert!(train.previous().lamp_is_on());
/// assert_eq!(train.cursor(), 1);
/// assert_eq!(train.moves(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RingTrain {
    wagons: Vec<LampWagon>,
    cursor: usize,
    moves: u64,
}

impl RingTrain {
    /// Train of `length` wagons with every lamp off
    pub fn with_length(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(TrainError::Empty);
        }
        Ok(Self {
            wagons: std::vec![LampWagon::default(); length],
            cursor: 0,
            moves: 0,
        })
    }

    /// Train whose wagon `i` starts with lamp state `lamps[i]`
    pub fn from_lamps<I>(lamps: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let wagons: Vec<LampWagon> = lamps.into_iter().map(LampWagon::from).collect();
        if wagons.is_empty() {
            return Err(TrainError::Empty);
        }
        Ok(Self {
            wagons,
            cursor: 0,
            moves: 0,
        })
    }

    /// Number of wagons
    pub fn len(&self) -> usize {
        self.wagons.len()
    }

    /// Always false: construction rejects empty trains
    pub fn is_empty(&self) -> bool {
        self.wagons.is_empty()
    }

    /// Absolute position of the cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Relative moves (`next` + `previous`) performed so far
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Snapshot of every lamp, in wagon order
    pub fn lamps(&self) -> Vec<bool> {
        self.wagons.iter().map(Wagon::lamp_is_on).collect()
    }

    /// Number of lit lamps
    pub fn lit_count(&self) -> usize {
        self.wagons.iter().filter(|wagon| wagon.lamp_is_on()).count()
    }

    /// Put the cursor on an absolute position (wrapped) without counting a move
    pub fn seek(&mut self, position: usize) {
        self.cursor = position % self.wagons.len();
    }

    fn slot(&self, index: usize) -> usize {
        index % self.wagons.len()
    }
}

impl Train for RingTrain {
    type Wagon = LampWagon;

    fn wagon_at(&mut self, index: usize) -> &mut LampWagon {
        let slot = self.slot(index);
        &mut self.wagons[slot]
    }

    fn current(&mut self) -> &mut LampWagon {
        &mut self.wagons[self.cursor]
    }

    fn next(&mut self) -> &mut LampWagon {
        self.moves += 1;
        self.cursor = self.slot(self.cursor + 1);
        &mut self.wagons[self.cursor]
    }

    fn previous(&mut self) -> &mut LampWagon {
        self.moves += 1;
        self.cursor = self.slot(self.cursor + self.wagons.len() - 1);
        &mut self.wagons[self.cursor]
    }
}
