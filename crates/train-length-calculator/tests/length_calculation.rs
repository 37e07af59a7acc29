// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end length calculation over many trains
//!
//! Lamp patterns are drawn from seeded RNGs so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use train_length_calculator::{CalculatorError, LengthCalculator};
use train_length_config::CalculatorConfig;
use train_length_core::{Direction, FixedTrain, LampWagon, RingTrain, Train, Wagon};

fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("train_length_calculator=debug")
        .with_test_writer()
        .try_init();
}

fn config(initial_direction: Direction) -> CalculatorConfig {
    CalculatorConfig {
        max_steps: 0,
        initial_direction,
    }
}

#[test]
fn test_dark_trains_of_every_size() {
    init_test_logging();
    for length in 1..=64 {
        let mut train = RingTrain::with_length(length).unwrap();
        let mut calculator = LengthCalculator::new(&mut train);

        assert_eq!(calculator.length(), length);
        let report = calculator.report().unwrap();
        assert_eq!(report.passes, 1);
        assert_eq!(report.steps, 2 * length as u64);
    }
}

#[test]
fn test_random_lamps_both_directions() {
    init_test_logging();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for length in 1..=48 {
        for direction in [Direction::Forward, Direction::Backward] {
            let lamps: Vec<bool> = (0..length).map(|_| rng.gen_bool(0.4)).collect();
            let lit_away_from_anchor = lamps.iter().skip(1).filter(|&&lit| lit).count();

            let mut train = RingTrain::from_lamps(lamps.clone()).unwrap();
            let mut calculator = LengthCalculator::with_config(&mut train, &config(direction));

            assert_eq!(calculator.length(), length, "lamps {:?}", lamps);
            let report = calculator.report().unwrap();
            assert_eq!(report.passes, lit_away_from_anchor + 1, "lamps {:?}", lamps);
            assert!(report.passes <= length);

            drop(calculator);
            assert_eq!(train.lit_count(), 0, "lamps {:?}", lamps);
            assert_eq!(train.cursor(), 0);
        }
    }
}

#[test]
fn test_fully_lit_train_needs_one_pass_per_wagon() {
    for length in [2, 3, 7, 16] {
        let mut train = RingTrain::from_lamps(vec![true; length]).unwrap();
        let mut calculator = LengthCalculator::new(&mut train);
        assert_eq!(calculator.length(), length);
        assert_eq!(calculator.report().unwrap().passes, length);
    }
}

#[test]
fn test_fixed_train() {
    let mut rng = StdRng::seed_from_u64(99);
    for length in 1..=32 {
        let lamps: Vec<bool> = (0..length).map(|_| rng.gen_bool(0.5)).collect();
        let mut train = FixedTrain::<32>::from_lamps(&lamps).unwrap();
        let mut calculator = LengthCalculator::new(&mut train);

        assert_eq!(calculator.length(), length);
        drop(calculator);
        assert!(train.lamps().all(|lit| !lit));
    }
}

#[test]
fn test_boxed_train() {
    let train: Box<RingTrain> = Box::new(RingTrain::with_length(11).unwrap());
    let mut calculator = LengthCalculator::new(train);
    assert_eq!(calculator.length(), 11);
}

/// Breaks the ring contract: every move lands on a fresh dark wagon
#[derive(Default)]
struct EndlessLine {
    anchor: LampWagon,
    here: LampWagon,
}

impl Train for EndlessLine {
    type Wagon = LampWagon;

    fn wagon_at(&mut self, _index: usize) -> &mut LampWagon {
        &mut self.anchor
    }

    fn current(&mut self) -> &mut LampWagon {
        &mut self.here
    }

    fn next(&mut self) -> &mut LampWagon {
        self.here.clear_lamp();
        &mut self.here
    }

    fn previous(&mut self) -> &mut LampWagon {
        self.here.clear_lamp();
        &mut self.here
    }
}

#[test]
fn test_step_budget_stops_broken_train() {
    init_test_logging();
    let budget = CalculatorConfig {
        max_steps: 1_000,
        initial_direction: Direction::Backward,
    };
    let mut calculator = LengthCalculator::with_config(EndlessLine::default(), &budget);

    assert_eq!(
        calculator.try_length(),
        Err(CalculatorError::StepBudgetExceeded {
            budget: 1_000,
            passes: 1
        })
    );
    assert_eq!(calculator.length(), 0);
    assert!(calculator.train().unwrap().anchor.lamp_is_on());
}
