//! Move strategy trait and its implementations.
//!
//! Strategies are trait-based so callers choose how decisions are made:
//! - `RandomThresholdStrategy`: seeded draws against a threshold
//! - `FixedStrategy`: a constant answer
//! - `ScriptedStrategy`: answers replayed by call order

use tracing::debug;

use crate::core::{RaceConfig, RaceRng};

/// Decides whether a car moves this round.
///
/// Queried once per car per round, with no arguments. Any randomness or
/// state lives inside the implementation.
pub trait MoveStrategy {
    fn is_movable(&mut self) -> bool;
}

impl<F: FnMut() -> bool> MoveStrategy for F {
    fn is_movable(&mut self) -> bool {
        self()
    }
}

// =============================================================================
// Random Threshold
// =============================================================================

/// Moves when a uniform draw reaches a threshold.
///
/// With the default configuration a draw is taken from `0..10` and the car
/// moves on 4 or more.
#[derive(Clone, Debug)]
pub struct RandomThresholdStrategy {
    rng: RaceRng,
    draw_upper: u8,
    threshold: u8,
}

impl RandomThresholdStrategy {
    /// Build from a configuration, seeding from the OS if no seed is set.
    ///
    /// # Panics
    ///
    /// Panics if the draw range is empty or the threshold exceeds it.
    #[must_use]
    pub fn from_config(config: &RaceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => RaceRng::new(seed),
            None => RaceRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "Random move strategy seeded");
        Self::with_rng(rng, config)
    }

    /// Build with an explicit RNG, ignoring `config.seed`.
    #[must_use]
    pub fn with_rng(rng: RaceRng, config: &RaceConfig) -> Self {
        assert!(config.draw_upper > 0, "Draw range must not be empty");
        assert!(
            config.threshold <= config.draw_upper,
            "Threshold must not exceed the draw range"
        );

        Self {
            rng,
            draw_upper: config.draw_upper,
            threshold: config.threshold,
        }
    }

    /// Default configuration with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_config(&RaceConfig::default().with_seed(seed))
    }
}

impl Default for RandomThresholdStrategy {
    fn default() -> Self {
        Self::from_config(&RaceConfig::default())
    }
}

impl MoveStrategy for RandomThresholdStrategy {
    fn is_movable(&mut self) -> bool {
        self.rng.draw(self.draw_upper) >= self.threshold
    }
}

// =============================================================================
// Fixed
// =============================================================================

/// Always gives the same answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedStrategy(pub bool);

impl FixedStrategy {
    #[must_use]
    pub const fn always() -> Self {
        Self(true)
    }

    #[must_use]
    pub const fn never() -> Self {
        Self(false)
    }
}

impl MoveStrategy for FixedStrategy {
    fn is_movable(&mut self) -> bool {
        self.0
    }
}

// =============================================================================
// Scripted
// =============================================================================

/// Replays a fixed sequence of answers by call order, wrapping around.
///
/// With `[true, false]` and two cars, the first car moves every round and
/// the second never does. An empty script always answers false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedStrategy {
    script: Vec<bool>,
    cursor: usize,
}

impl ScriptedStrategy {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// Number of answers given so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl MoveStrategy for ScriptedStrategy {
    fn is_movable(&mut self) -> bool {
        if self.script.is_empty() {
            return false;
        }
        let answer = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        answer
    }
}
