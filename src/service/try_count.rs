//! Number of rounds to race.

use serde::{Deserialize, Serialize};

use crate::core::error::{RaceError, Result};

/// Validated round count. Zero is allowed and means no rounds are played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TryCount(u64);

impl TryCount {
    /// Create a round count, rejecting negative values.
    pub fn new(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| RaceError::InvalidTryCount(value))
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for TryCount {
    type Error = RaceError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rejected() {
        for input in [-1, -2, -3, i64::MIN] {
            assert_eq!(TryCount::new(input), Err(RaceError::InvalidTryCount(input)));
        }
    }

    #[test]
    fn test_non_negative_accepted() {
        for input in [0, 1, 2, 3, i64::from(i32::MAX), i64::MAX] {
            assert_eq!(TryCount::new(input).unwrap().value(), input as u64);
        }
    }

    #[test]
    fn test_conversions() {
        assert_eq!(TryCount::try_from(5i64).unwrap().value(), 5);
        assert_eq!(
            TryCount::try_from(-5i64),
            Err(RaceError::InvalidTryCount(-5))
        );
        assert_eq!(TryCount::default().value(), 0);
    }
}
