//! # racing-car
//!
//! A small racing game: named cars advance one step per round when their
//! move strategy says so, and after a fixed number of rounds the cars in
//! the lead win.
//!
//! ## Design Principles
//!
//! 1. **Validated Values**: `Name`, `Position` and `TryCount` can only be
//!    built from valid input. Invalid input is a `RaceError`, never a
//!    default.
//!
//! 2. **Injected Decisions**: The race never rolls dice itself. Every move
//!    decision comes from a `MoveStrategy` handed in by the caller.
//!
//! 3. **Owned State**: A `RacingCarService` owns the cars of one game.
//!    Nothing is global, so games are isolated from each other.
//!
//! ## Modules
//!
//! - `core`: Errors, deterministic RNG, configuration
//! - `cars`: Names, positions, cars and the car collection
//! - `strategy`: Move strategies (random threshold, fixed, scripted)
//! - `service`: Round count, race orchestration, final report

pub mod core;
pub mod cars;
pub mod strategy;
pub mod service;

// Re-export commonly used types
pub use crate::core::{
    ErrorKind, NameViolation, RaceError, Result,
    RaceConfig, RaceRng,
};

pub use crate::cars::{Car, CarStatus, Cars, Name, Position, MAX_NAME_LENGTH};

pub use crate::strategy::{FixedStrategy, MoveStrategy, RandomThresholdStrategy, ScriptedStrategy};

pub use crate::service::{RaceResult, RacingCarService, TryCount};
