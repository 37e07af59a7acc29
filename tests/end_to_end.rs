// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! End-to-end: configuration file -> calculator -> measured train

use std::collections::HashMap;
use std::fs;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

use train_length::config::{load_config, validate_config};
use train_length::prelude::*;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("train_length.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_config_file_drives_calculation() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[calculator]
max_steps = 1000000
initial_direction = "forward"

[logging]
level = "warn"
"#,
    );

    let config = load_config(Some(path.as_path()), None).unwrap();
    validate_config(&config).unwrap();
    assert_eq!(config.calculator.initial_direction, Direction::Forward);

    let mut rng = StdRng::seed_from_u64(0x7A1);
    for length in [1usize, 2, 3, 17, 100] {
        let lamps: Vec<bool> = (0..length).map(|_| rng.gen_bool(0.5)).collect();
        let mut train = RingTrain::from_lamps(lamps).unwrap();

        let mut calculator = train_length::calculator_from_config(&mut train, &config);
        assert_eq!(calculator.length(), length);
        let report = calculator.report().unwrap();
        assert!(report.passes <= length);
        drop(calculator);

        assert_eq!(train.lit_count(), 0);
        assert_eq!(train.cursor(), 0);
    }
}

#[test]
fn test_cli_budget_override_exhausts_scan() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[calculator]\nmax_steps = 0\n");

    let mut cli = HashMap::new();
    cli.insert("max_steps".to_string(), "5".to_string());
    let config = load_config(Some(path.as_path()), Some(&cli)).unwrap();
    assert_eq!(config.calculator.step_budget(), Some(5));

    let mut train = RingTrain::with_length(10).unwrap();
    let mut calculator = train_length::calculator_from_config(&mut train, &config);
    assert!(matches!(
        calculator.try_length(),
        Err(CalculatorError::StepBudgetExceeded { budget: 5, .. })
    ));
    // Exhaustion is remembered, the sentinel path reports zero
    assert_eq!(calculator.length(), 0);
    drop(calculator);
    assert_eq!(train.moves(), 5);
}

#[test]
fn test_default_config_is_unbounded_backward() {
    let config = TrainLengthConfig::default();
    validate_config(&config).unwrap();

    let mut calculator =
        train_length::calculator_from_config(RingTrain::with_length(300).unwrap(), &config);
    assert_eq!(calculator.direction(), Direction::Backward);
    assert_eq!(calculator.length(), 300);
    assert_eq!(calculator.report().unwrap().steps, 600);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[logging]\nformat = \"xml\"\n");

    let config = load_config(Some(path.as_path()), None).unwrap();
    assert!(validate_config(&config).is_err());
}
