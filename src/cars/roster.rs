//! The ordered set of cars taking part in a race.

use rustc_hash::FxHashSet;

use super::car::{Car, CarStatus};
use super::name::Name;
use crate::core::error::{RaceError, Result};
use crate::strategy::MoveStrategy;

/// Ordered collection of uniquely named cars.
///
/// Order is registration order and never changes. Names are unique
/// (exact, case-sensitive match on the trimmed name).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cars {
    cars: Vec<Car>,
}

impl Cars {
    /// Build a car at position 0 for every name, in input order.
    ///
    /// Fails on the first invalid name, or with `DuplicateName` if any name
    /// repeats.
    ///
    /// ```
    /// use racing_car::cars::Cars;
    /// use racing_car::core::ErrorKind;
    ///
    /// let cars = Cars::new(["pobi", "woni", "jun"]).unwrap();
    /// assert_eq!(cars.len(), 3);
    ///
    /// let err = Cars::new(["car1", "car2", "car1"]).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DuplicateName);
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cars = Self::default();
        cars.register(names)?;
        Ok(cars)
    }

    /// Add cars for `names` after the existing ones.
    ///
    /// New names must be unique among themselves and against cars already
    /// registered. On failure the collection is left untouched.
    pub fn register<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(Name::new)
            .collect::<Result<Vec<_>>>()?;

        {
            let mut seen: FxHashSet<&str> = self.cars.iter().map(|c| c.name().as_str()).collect();
            for name in &names {
                if !seen.insert(name.as_str()) {
                    return Err(RaceError::DuplicateName(name.to_string()));
                }
            }
        }

        self.cars
            .extend(names.into_iter().map(|name| Car::from_parts(name, Default::default())));
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    /// Look up a car by its (trimmed) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.name().as_str() == name)
    }

    /// Play one round: ask `strategy` once per car, in order, and move the
    /// car when it answers true.
    pub fn move_all<S: MoveStrategy + ?Sized>(&mut self, strategy: &mut S) {
        for car in &mut self.cars {
            if strategy.is_movable() {
                car.move_forward();
            }
        }
    }

    /// Every car at the leading position, in registration order.
    ///
    /// Ties are all included. Empty only if there are no cars.
    #[must_use]
    pub fn winners(&self) -> Vec<&Car> {
        let Some(lead) = self.cars.iter().map(Car::position).max() else {
            return Vec::new();
        };

        self.cars
            .iter()
            .filter(|car| car.is_same_position(&lead))
            .collect()
    }

    /// Status of every car, in registration order.
    #[must_use]
    pub fn statuses(&self) -> Vec<CarStatus> {
        self.cars.iter().map(Car::status).collect()
    }
}

impl<'a> IntoIterator for &'a Cars {
    type Item = &'a Car;
    type IntoIter = std::slice::Iter<'a, Car>;

    fn into_iter(self) -> Self::IntoIter {
        self.cars.iter()
    }
}
