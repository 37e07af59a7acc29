// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Wagon and train traits
//!
//! A train is a ring of wagons of unknown length (at least one) with a
//! single cursor. Moving `next` from the last wagon lands on the first and
//! moving `previous` from the first lands on the last. `next` and `previous`
//! are inverses.
//!
//! ## Contract
//!
//! Implementations must honour circularity and the inverse-movement rule.
//! A train that breaks either one makes the length calculation loop forever
//! unless the caller configures a step budget.

use super::direction::Direction;

/// A single wagon: one lamp that can be switched on, off, and read
///
/// # Example
///
/// ```rust
/// use train_length_core::{LampWagon, Wagon};
///
/// let mut wagon = LampWagon::default();
/// wagon.set_lamp();
/// assert!(wagon.lamp_is_on());
/// wagon.clear_lamp();
/// assert!(!wagon.lamp_is_on());
/// ```
pub trait Wagon {
    /// Switch the lamp on
    fn set_lamp(&mut self);

    /// Switch the lamp off
    fn clear_lamp(&mut self);

    /// Current lamp state
    fn lamp_is_on(&self) -> bool;
}

/// Circular cursor over wagons
///
/// Every accessor hands back a mutable borrow of a wagon owned by the train.
/// The cursor position itself is never exposed through this trait.
pub trait Train {
    /// Wagon type stored in this train
    type Wagon: Wagon + ?Sized;

    /// Wagon at an absolute position
    ///
    /// Deterministic and idempotent. Does not move the cursor.
    fn wagon_at(&mut self, index: usize) -> &mut Self::Wagon;

    /// Wagon under the cursor, without moving it
    fn current(&mut self) -> &mut Self::Wagon;

    /// Move the cursor one wagon forward and return the new current wagon
    fn next(&mut self) -> &mut Self::Wagon;

    /// Move the cursor one wagon backward and return the new current wagon
    fn previous(&mut self) -> &mut Self::Wagon;

    /// Move one wagon in `direction`
    fn step(&mut self, direction: Direction) -> &mut Self::Wagon {
        match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.previous(),
        }
    }
}

// A borrowed train can be handed to a calculator while the caller keeps
// ownership of the wagons.
impl<T: Train + ?Sized> Train for &mut T {
    type Wagon = T::Wagon;

    fn wagon_at(&mut self, index: usize) -> &mut Self::Wagon {
        (**self).wagon_at(index)
    }

    fn current(&mut self) -> &mut Self::Wagon {
        (**self).current()
    }

    fn next(&mut self) -> &mut Self::Wagon {
        (**self).next()
    }

    fn previous(&mut self) -> &mut Self::Wagon {
        (**self).previous()
    }
}

#[cfg(feature = "std")]
impl<T: Train + ?Sized> Train for std::boxed::Box<T> {
    type Wagon = T::Wagon;

    fn wagon_at(&mut self, index: usize) -> &mut Self::Wagon {
        (**self).wagon_at(index)
    }

    fn current(&mut self) -> &mut Self::Wagon {
        (**self).current()
    }

    fn next(&mut self) -> &mut Self::Wagon {
        (**self).next()
    }

    fn previous(&mut self) -> &mut Self::Wagon {
        (**self).previous()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::std_impl::RingTrain;

    fn walk<T: Train>(mut train: T, steps: usize, direction: Direction) -> bool {
        for _ in 0..steps {
            train.step(direction);
        }
        train.current().lamp_is_on()
    }

    #[test]
    fn test_step_follows_direction() {
        let mut train = RingTrain::from_lamps([false, true, false]).unwrap();
        assert!(train.step(Direction::Forward).lamp_is_on());
        assert!(!train.step(Direction::Backward).lamp_is_on());
        assert_eq!(train.cursor(), 0);
    }

    #[test]
    fn test_borrowed_train_moves_owner_cursor() {
        let mut train = RingTrain::from_lamps([false, false, true, false]).unwrap();
        assert!(walk(&mut train, 2, Direction::Forward));
        assert_eq!(train.cursor(), 2);
    }

    #[test]
    fn test_boxed_train_is_a_train() {
        let train: std::boxed::Box<RingTrain> =
            std::boxed::Box::new(RingTrain::from_lamps([true, false]).unwrap());
        assert!(walk(train, 2, Direction::Backward));
    }
}
