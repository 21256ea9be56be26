//! Core types shared by the rest of the crate: errors, RNG, configuration.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{RaceConfig, DEFAULT_DRAW_UPPER, DEFAULT_MOVE_THRESHOLD};
pub use error::{ErrorKind, NameViolation, RaceError, Result};
pub use rng::RaceRng;
