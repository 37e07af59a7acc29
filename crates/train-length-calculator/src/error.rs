// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Error types for length calculation

use thiserror::Error;

/// Length calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The scan made `budget` moves without closing the ring
    ///
    /// Either the budget is too small for the train or the train does not
    /// honour the ring contract. Lamps and cursor are left where the scan
    /// stopped.
    #[error("Step budget of {budget} moves exhausted after {passes} scan passes; the train may not be circular")]
    StepBudgetExceeded { budget: u64, passes: usize },
}

/// Result type for length calculation
pub type Result<T> = std::result::Result<T, CalculatorError>;
