//! Running a race.
//!
//! `RacingCarService` owns the cars of one game, plays the configured
//! number of rounds with a caller-supplied `MoveStrategy`, and reports
//! statuses and winners as a `RaceResult`.

mod racing;
mod report;
mod try_count;

pub use racing::RacingCarService;
pub use report::RaceResult;
pub use try_count::TryCount;
