// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity ring train for embedded systems
//!
//! Uses a stack-allocated array; only the first `len` slots form the ring.

use crate::traits::{Result, Train, TrainError, Wagon};
use crate::wagon::LampWagon;

/// Circular train with at most `N` wagons and no heap allocation
///
/// # Example
/// ```
/// use train_length_core::{FixedTrain, Train, Wagon};
///
/// let mut train = FixedTrain::<8>::with_length(3).unwrap();
/// train.wagon_at(0).set_lamp();
/// train.next();
/// train.next();
/// assert!(train.next().lamp_is_on());
/// ```
#[derive(Debug, Clone)]
pub struct FixedTrain<const N: usize> {
    wagons: [LampWagon; N],
    len: usize,
    cursor: usize,
    moves: u64,
}

impl<const N: usize> FixedTrain<N> {
    /// Train of `length` wagons with every lamp off
    pub fn with_length(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(TrainError::Empty);
        }
        if length > N {
            return Err(TrainError::CapacityExceeded {
                requested: length,
                capacity: N,
            });
        }
        Ok(Self {
            wagons: [LampWagon::new(false); N],
            len: length,
            cursor: 0,
            moves: 0,
        })
    }

    /// Train whose wagon `i` starts with lamp state `lamps[i]`
    pub fn from_lamps(lamps: &[bool]) -> Result<Self> {
        let mut train = Self::with_length(lamps.len())?;
        for (wagon, &lamp_on) in train.wagons.iter_mut().zip(lamps) {
            *wagon = LampWagon::new(lamp_on);
        }
        Ok(train)
    }

    /// Number of wagons in the ring
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: construction rejects empty trains
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Compile-time capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Lamp states in wagon order
    pub fn lamps(&self) -> impl Iterator<Item = bool> + '_ {
        self.wagons[..self.len].iter().map(Wagon::lamp_is_on)
    }
}

impl<const N: usize> Train for FixedTrain<N> {
    type Wagon = LampWagon;

    fn wagon_at(&mut self, index: usize) -> &mut LampWagon {
        &mut self.wagons[index % self.len]
    }

    fn current(&mut self) -> &mut LampWagon {
        &mut self.wagons[self.cursor]
    }

    fn next(&mut self) -> &mut LampWagon {
        self.moves += 1;
        self.cursor = if self.cursor + 1 == self.len {
            0
        } else {
            self.cursor + 1
        };
        &mut self.wagons[self.cursor]
    }

    fn previous(&mut self) -> &mut LampWagon {
        self.moves += 1;
        self.cursor = if self.cursor == 0 {
            self.len - 1
        } else {
            self.cursor - 1
        };
        &mut self.wagons[self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_exceeded() {
        assert_eq!(
            FixedTrain::<4>::with_length(5).unwrap_err(),
            TrainError::CapacityExceeded {
                requested: 5,
                capacity: 4
            }
        );
        assert_eq!(FixedTrain::<4>::with_length(0).unwrap_err(), TrainError::Empty);
    }

    #[test]
    fn test_ring_ignores_spare_capacity() {
        let mut train = FixedTrain::<16>::with_length(3).unwrap();
        train.previous();
        assert_eq!(train.cursor(), 2);
        train.next();
        train.next();
        assert_eq!(train.cursor(), 1);
        assert_eq!(train.moves(), 3);
        assert_eq!(train.capacity(), 16);
    }

    #[test]
    fn test_from_lamps_preserves_order() {
        let mut train = FixedTrain::<4>::from_lamps(&[false, true, false]).unwrap();
        assert!(train.next().lamp_is_on());
        assert!(!train.next().lamp_is_on());
        assert!(train.lamps().eq([false, true, false]));
    }
}
