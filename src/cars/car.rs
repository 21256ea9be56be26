//! A single car and its status snapshot.

use serde::{Deserialize, Serialize};

use super::name::Name;
use super::position::Position;
use crate::core::error::Result;

/// Read-only snapshot of a car, for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarStatus {
    pub name: String,
    pub position: u64,
}

impl CarStatus {
    pub fn new(name: impl Into<String>, position: u64) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A named car with an odometer.
///
/// ## Lifecycle
///
/// Created at position 0 (or a given start), moved zero or more times
/// during the race, then read for its final status. Whether to move on a
/// given round is the caller's decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    name: Name,
    position: Position,
}

impl Car {
    /// Create a car at the starting line.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        Ok(Self::from_parts(Name::new(name)?, Position::default()))
    }

    /// Create a car at an explicit position.
    pub fn with_position(name: impl AsRef<str>, position: i64) -> Result<Self> {
        Ok(Self::from_parts(Name::new(name)?, Position::new(position)?))
    }

    /// Assemble a car from already-validated parts.
    #[must_use]
    pub fn from_parts(name: Name, position: Position) -> Self {
        Self { name, position }
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Advance one step.
    pub fn move_forward(&mut self) {
        self.position.forward();
    }

    /// Snapshot of name and position.
    #[must_use]
    pub fn status(&self) -> CarStatus {
        CarStatus::new(self.name.as_str(), self.position.value())
    }

    /// Check whether this car stands at `position`.
    #[must_use]
    pub fn is_same_position(&self, position: &Position) -> bool {
        self.position == *position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{NameViolation, RaceError};

    #[test]
    fn test_new_starts_at_zero() {
        let car = Car::new("pobi").unwrap();
        assert_eq!(car.name().as_str(), "pobi");
        assert_eq!(car.position().value(), 0);
    }

    #[test]
    fn test_with_position() {
        let car = Car::with_position("crew", 4).unwrap();
        assert_eq!(car.status(), CarStatus::new("crew", 4));
    }

    #[test]
    fn test_invalid_inputs() {
        let err = Car::new("").unwrap_err();
        assert_eq!(err.name_violation(), Some(NameViolation::Blank));

        assert_eq!(
            Car::with_position("pobi", -1).unwrap_err(),
            RaceError::InvalidPosition(-1)
        );
    }

    #[test]
    fn test_move_forward() {
        let mut car = Car::with_position("jun", 2).unwrap();
        for _ in 0..5 {
            car.move_forward();
        }
        assert_eq!(car.position().value(), 7);
    }

    #[test]
    fn test_is_same_position_by_value() {
        let mut a = Car::new("a").unwrap();
        let b = Car::with_position("b", 1).unwrap();

        assert!(!a.is_same_position(&b.position()));
        a.move_forward();
        assert!(a.is_same_position(&b.position()));
        assert!(a.is_same_position(&Position::new(1).unwrap()));
    }

    #[test]
    fn test_status_serde() {
        let status = Car::with_position("woni", 3).unwrap().status();
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"name":"woni","position":3}"#);
        let back: CarStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
