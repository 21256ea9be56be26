//! Move decisions.
//!
//! A `MoveStrategy` answers, once per car per round, whether that car
//! advances. The race itself never draws random numbers; it only asks the
//! strategy it was handed.
//!
//! - `RandomThresholdStrategy`: draw from a range, move on a high enough draw
//! - `FixedStrategy`: always the same answer
//! - `ScriptedStrategy`: replay a fixed sequence of answers
//! - any `FnMut() -> bool` closure

mod policy;

pub use policy::{FixedStrategy, MoveStrategy, RandomThresholdStrategy, ScriptedStrategy};
