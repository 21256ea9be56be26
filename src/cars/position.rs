//! Car odometer.

use serde::{Deserialize, Serialize};

use crate::core::error::{RaceError, Result};

/// A car's cumulative forward progress.
///
/// Only ever moves forward, one step at a time. Compared by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(u64);

impl Position {
    /// Create a position, rejecting negative values.
    pub fn new(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| RaceError::InvalidPosition(value))
    }

    /// Get the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Advance by exactly one step.
    pub fn forward(&mut self) {
        self.0 += 1;
    }
}

impl TryFrom<i64> for Position {
    type Error = RaceError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
