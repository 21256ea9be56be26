//! Race orchestration.

use tracing::{debug, info, warn};

use super::report::RaceResult;
use super::try_count::TryCount;
use crate::cars::{CarStatus, Cars};
use crate::core::error::Result;
use crate::strategy::MoveStrategy;

/// Runs one game: registers cars, plays rounds, reports the outcome.
///
/// Each service owns its own cars, so separate games never share state.
///
/// ## Example
///
/// ```
/// use racing_car::service::{RacingCarService, TryCount};
/// use racing_car::strategy::FixedStrategy;
///
/// let mut service = RacingCarService::new();
/// service.create_cars(["pobi", "crew"]).unwrap();
/// service.run(TryCount::new(3).unwrap(), &mut FixedStrategy::always());
///
/// let result = service.result();
/// assert_eq!(result.winner_names(), vec!["pobi", "crew"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RacingCarService {
    cars: Cars,
}

impl RacingCarService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of cars.
    #[must_use]
    pub fn with_cars(cars: Cars) -> Self {
        Self { cars }
    }

    #[must_use]
    pub fn cars(&self) -> &Cars {
        &self.cars
    }

    /// Register a car for every name.
    ///
    /// Either every name is registered or, on error, none are.
    pub fn create_cars<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.cars.register(names) {
            Ok(()) => {
                debug!(cars = self.cars.len(), "Cars registered");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Car registration rejected");
                Err(err)
            }
        }
    }

    /// Play `try_count` rounds, each offering every car one move.
    pub fn run<S: MoveStrategy + ?Sized>(&mut self, try_count: TryCount, strategy: &mut S) {
        for round in 1..=try_count.value() {
            self.cars.move_all(strategy);
            debug!(round, "Round finished");
        }
        self.log_finish(try_count);
    }

    /// Like [`run`](Self::run), handing the round number (from 1) and the
    /// statuses to `observer` after every round.
    pub fn run_with_observer<S, F>(&mut self, try_count: TryCount, strategy: &mut S, mut observer: F)
    where
        S: MoveStrategy + ?Sized,
        F: FnMut(u64, &[CarStatus]),
    {
        for round in 1..=try_count.value() {
            self.cars.move_all(strategy);
            debug!(round, "Round finished");
            observer(round, &self.cars.statuses());
        }
        self.log_finish(try_count);
    }

    /// Current status of every car, in registration order.
    #[must_use]
    pub fn car_statuses(&self) -> Vec<CarStatus> {
        self.cars.statuses()
    }

    /// Cars currently in the lead, in registration order.
    #[must_use]
    pub fn winners(&self) -> Vec<CarStatus> {
        self.cars.winners().into_iter().map(|car| car.status()).collect()
    }

    /// Statuses and winners together.
    #[must_use]
    pub fn result(&self) -> RaceResult {
        RaceResult::from_cars(&self.cars)
    }

    /// Play a whole game on a fresh service.
    pub fn race<I, S, M>(names: I, try_count: TryCount, strategy: &mut M) -> Result<RaceResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        M: MoveStrategy + ?Sized,
    {
        let mut service = Self::new();
        service.create_cars(names)?;
        service.run(try_count, strategy);
        Ok(service.result())
    }

    fn log_finish(&self, try_count: TryCount) {
        let winners: Vec<&str> = self
            .cars
            .winners()
            .into_iter()
            .map(|car| car.name().as_str())
            .collect();
        info!(rounds = try_count.value(), ?winners, "Race finished");
    }
}
