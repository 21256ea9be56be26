//! Race configuration.
//!
//! `RaceConfig` tunes the random move strategy: the range a draw is taken
//! from, the threshold a draw must reach for a car to move, and an optional
//! seed for reproducible races.
//!
//! Deserialized configs are validated on load, so an out-of-range threshold
//! from a config file is a `RaceError` rather than a panic later on.

use serde::{Deserialize, Serialize};

use super::error::{RaceError, Result};

/// Default exclusive upper bound of a draw (draws are `0..10`).
pub const DEFAULT_DRAW_UPPER: u8 = 10;

/// Default minimum draw for a car to move.
pub const DEFAULT_MOVE_THRESHOLD: u8 = 4;

/// Configuration for the random move strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RaceConfigFields")]
pub struct RaceConfig {
    /// Draws are taken uniformly from `0..draw_upper`.
    pub draw_upper: u8,

    /// A car moves when its draw is at least this value.
    pub threshold: u8,

    /// Fixed seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            draw_upper: DEFAULT_DRAW_UPPER,
            threshold: DEFAULT_MOVE_THRESHOLD,
            seed: None,
        }
    }
}

/// Unchecked field set read by serde, validated into a `RaceConfig`.
/// Missing fields take their defaults.
#[derive(Deserialize)]
#[serde(default)]
struct RaceConfigFields {
    draw_upper: u8,
    threshold: u8,
    seed: Option<u64>,
}

impl Default for RaceConfigFields {
    fn default() -> Self {
        let RaceConfig {
            draw_upper,
            threshold,
            seed,
        } = RaceConfig::default();
        Self {
            draw_upper,
            threshold,
            seed,
        }
    }
}

impl TryFrom<RaceConfigFields> for RaceConfig {
    type Error = RaceError;

    fn try_from(fields: RaceConfigFields) -> Result<Self> {
        let config = Self {
            draw_upper: fields.draw_upper,
            threshold: fields.threshold,
            seed: fields.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

impl RaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the draw range is non-empty and contains the threshold.
    pub fn validate(&self) -> Result<()> {
        if self.draw_upper == 0 {
            return Err(RaceError::InvalidConfig(
                "draw range must not be empty".to_string(),
            ));
        }
        if self.threshold > self.draw_upper {
            return Err(RaceError::InvalidConfig(format!(
                "threshold {} exceeds draw range 0..{}",
                self.threshold, self.draw_upper
            )));
        }
        Ok(())
    }

    /// Set the move threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        assert!(
            threshold <= self.draw_upper,
            "Threshold must not exceed the draw range"
        );
        self.threshold = threshold;
        self
    }

    /// Set the exclusive upper bound of a draw.
    #[must_use]
    pub fn with_draw_upper(mut self, draw_upper: u8) -> Self {
        assert!(draw_upper > 0, "Draw range must not be empty");
        assert!(
            self.threshold <= draw_upper,
            "Threshold must not exceed the draw range"
        );
        self.draw_upper = draw_upper;
        self
    }

    /// Fix the seed for a reproducible race.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
