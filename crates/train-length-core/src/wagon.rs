// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Plain lamp wagon shared by the bundled train implementations

use crate::traits::Wagon;

/// A wagon that is nothing but its lamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LampWagon {
    lamp_on: bool,
}

impl LampWagon {
    pub const fn new(lamp_on: bool) -> Self {
        Self { lamp_on }
    }
}

impl Wagon for LampWagon {
    fn set_lamp(&mut self) {
        self.lamp_on = true;
    }

    fn clear_lamp(&mut self) {
        self.lamp_on = false;
    }

    fn lamp_is_on(&self) -> bool {
        self.lamp_on
    }
}

impl From<bool> for LampWagon {
    fn from(lamp_on: bool) -> Self {
        Self::new(lamp_on)
    }
}
