// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Lamp-marking length calculation
//!
//! ## Algorithm
//!
//! 1. Switch on the lamp of wagon 0 (the anchor).
//! 2. Walk in the current direction, counting moves, until a lit wagon is
//!    reached. The count is the tentative length.
//! 3. Switch that lamp off and walk the same number of moves back.
//! 4. If the wagon we are back on is dark, the anchor lamp was the one we
//!    switched off: the tentative length is the train length.
//! 5. Otherwise flip the direction and go to 2.
//!
//! Every pass but the last switches off one lamp that was lit before the
//! calculation started, so a train of N wagons needs at most N passes and
//! ends with every lamp off and the cursor back on wagon 0.
//!
//! ## Preconditions
//!
//! - The cursor rests on wagon 0 when the calculation starts.
//! - Nobody else touches the train until the calculation returns (enforced
//!   by the `&mut` borrow for the calculator's own train).
//! - The train honours the ring contract. Without a step budget a train that
//!   does not is scanned forever.

use crate::error::{CalculatorError, Result};
use tracing::{debug, error, info, trace, warn};
use train_length_config::CalculatorConfig;
use train_length_core::{Direction, Train, Wagon};

/// Statistics of a completed calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of wagons
    pub length: usize,
    /// Scan passes, including the final one
    pub passes: usize,
    /// Relative moves made, scanning and rewinding
    pub steps: u64,
}

/// Something that knows the length of a train
pub trait CalculateLength {
    type Train: Train;

    /// The train being measured, if any
    fn train(&self) -> Option<&Self::Train>;

    /// Number of wagons, 0 when there is no train
    fn length(&mut self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Memo {
    Pending,
    Computed(ScanReport),
    Exhausted { budget: u64, passes: usize },
}

/// Measures a train once and remembers the answer
///
/// # Example
///
/// ```
/// use train_length_calculator::LengthCalculator;
/// use train_length_core::RingTrain;
///
/// let mut train = RingTrain::with_length(12).unwrap();
/// let mut calculator = LengthCalculator::new(&mut train);
/// assert_eq!(calculator.length(), 12);
/// assert_eq!(calculator.length(), 12); // memoized, no further moves
/// ```
#[derive(Debug)]
pub struct LengthCalculator<T: Train> {
    train: Option<T>,
    direction: Direction,
    step_budget: Option<u64>,
    memo: Memo,
}

impl<T: Train> LengthCalculator<T> {
    /// Calculator with the default configuration (backward first, unbounded)
    pub fn new(train: T) -> Self {
        Self::with_config(train, &CalculatorConfig::default())
    }

    pub fn with_config(train: T, config: &CalculatorConfig) -> Self {
        Self {
            train: Some(train),
            direction: config.initial_direction,
            step_budget: config.step_budget(),
            memo: Memo::Pending,
        }
    }

    /// Calculator with nothing to measure; its length is always 0
    pub fn without_train() -> Self {
        Self::from_option(None)
    }

    pub fn from_option(train: Option<T>) -> Self {
        Self {
            train,
            direction: Direction::default(),
            step_budget: None,
            memo: Memo::Pending,
        }
    }

    pub fn train(&self) -> Option<&T> {
        self.train.as_ref()
    }

    /// Hand the train back to the caller
    pub fn into_train(self) -> Option<T> {
        self.train
    }

    /// Current scan direction
    ///
    /// After a calculation this is the direction of the final pass.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Statistics of the completed calculation, if one has run
    pub fn report(&self) -> Option<ScanReport> {
        match self.memo {
            Memo::Computed(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self.memo, Memo::Computed(_))
    }

    /// Number of wagons
    ///
    /// Runs the calculation on the first call. Returns 0 when there is no
    /// train or when the step budget ran out (the error is logged).
    pub fn length(&mut self) -> usize {
        match self.try_length() {
            Ok(length) => length,
            Err(e) => {
                error!("[TRAIN-LENGTH] Length unavailable: {}", e);
                0
            }
        }
    }

    /// Number of wagons, surfacing a step budget failure
    ///
    /// The outcome is remembered either way: a train left mid-scan by an
    /// exhausted budget is not touched again.
    ///
    /// # Errors
    ///
    /// `CalculatorError::StepBudgetExceeded` if the scan did not close the
    /// ring within the configured number of moves.
    pub fn try_length(&mut self) -> Result<usize> {
        match self.memo {
            Memo::Computed(report) => return Ok(report.length),
            Memo::Exhausted { budget, passes } => {
                return Err(CalculatorError::StepBudgetExceeded { budget, passes })
            }
            Memo::Pending => {}
        }

        let Some(train) = self.train.as_mut() else {
            return Ok(0);
        };

        let mut scan = Scan {
            train,
            direction: self.direction,
            budget: self.step_budget,
            steps: 0,
            passes: 0,
            length: 0,
        };
        let outcome = scan.run();
        self.direction = scan.direction;

        match outcome {
            Ok(length) => {
                let report = ScanReport {
                    length,
                    passes: scan.passes,
                    steps: scan.steps,
                };
                info!(
                    "[TRAIN-LENGTH] Train has {} wagons ({} passes, {} moves)",
                    report.length, report.passes, report.steps
                );
                self.memo = Memo::Computed(report);
                Ok(length)
            }
            Err(CalculatorError::StepBudgetExceeded { budget, passes }) => {
                warn!(
                    "[TRAIN-LENGTH] Gave up after {} moves in {} passes",
                    budget, passes
                );
                self.memo = Memo::Exhausted { budget, passes };
                Err(CalculatorError::StepBudgetExceeded { budget, passes })
            }
        }
    }
}

impl<T: Train> CalculateLength for LengthCalculator<T> {
    type Train = T;

    fn train(&self) -> Option<&T> {
        LengthCalculator::train(self)
    }

    fn length(&mut self) -> usize {
        LengthCalculator::length(self)
    }
}

/// State of one calculation in progress
struct Scan<'a, T: Train> {
    train: &'a mut T,
    direction: Direction,
    budget: Option<u64>,
    steps: u64,
    passes: usize,
    length: usize,
}

impl<T: Train> Scan<'_, T> {
    fn run(&mut self) -> Result<usize> {
        self.train.wagon_at(0).set_lamp();
        trace!("[TRAIN-LENGTH] Anchor lamp switched on");

        loop {
            self.passes += 1;
            self.scan_in_direction()?;
            self.train.current().clear_lamp();
            let origin_lit = self.rewind()?;

            debug!(
                "[TRAIN-LENGTH] Pass {} {}: lit wagon {} moves away, origin {}",
                self.passes,
                self.direction,
                self.length,
                if origin_lit { "still lit" } else { "dark" }
            );

            if !origin_lit {
                return Ok(self.length);
            }
            self.direction = self.direction.flip();
        }
    }

    /// Walk until a lit wagon; `length` ends up as the number of moves
    fn scan_in_direction(&mut self) -> Result<()> {
        self.length = 1;
        while !self.advance(self.direction)? {
            self.length += 1;
        }
        Ok(())
    }

    /// Walk `length` moves back towards the pass origin; true if it is lit
    fn rewind(&mut self) -> Result<bool> {
        if self.length == 0 {
            return Ok(self.train.current().lamp_is_on());
        }
        let back = self.direction.flip();
        let mut lamp_on = false;
        for _ in 0..self.length {
            lamp_on = self.advance(back)?;
        }
        Ok(lamp_on)
    }

    /// One move, charged against the budget; returns the reached lamp
    fn advance(&mut self, direction: Direction) -> Result<bool> {
        if let Some(budget) = self.budget {
            if self.steps >= budget {
                return Err(CalculatorError::StepBudgetExceeded {
                    budget,
                    passes: self.passes,
                });
            }
        }
        self.steps += 1;
        Ok(self.train.step(direction).lamp_is_on())
    }
}
