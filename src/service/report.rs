//! Final race report.

use serde::{Deserialize, Serialize};

use crate::cars::{CarStatus, Cars};

/// Statuses of every car plus the winners, both in registration order.
///
/// Serializes to a plain structure for whatever presentation layer sits on
/// top (console printer, HTTP response).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    pub statuses: Vec<CarStatus>,
    pub winners: Vec<CarStatus>,
}

impl RaceResult {
    /// Capture the current state of `cars`.
    #[must_use]
    pub fn from_cars(cars: &Cars) -> Self {
        Self {
            statuses: cars.statuses(),
            winners: cars.winners().into_iter().map(|car| car.status()).collect(),
        }
    }

    /// Winner names, in registration order.
    #[must_use]
    pub fn winner_names(&self) -> Vec<&str> {
        self.winners.iter().map(|s| s.name.as_str()).collect()
    }

    /// Check if the named car is among the winners.
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners.iter().any(|s| s.name == name)
    }
}
