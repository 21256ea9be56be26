//! Cars and the validated values they are built from.
//!
//! - `Name`: 1 to 5 characters, not blank
//! - `Position`: non-negative odometer, moves forward one step at a time
//! - `Car`: a name plus a position
//! - `Cars`: uniquely named cars in registration order, with winner lookup

mod car;
mod name;
mod position;
mod roster;

pub use car::{Car, CarStatus};
pub use name::{Name, MAX_NAME_LENGTH};
pub use position::Position;
pub use roster::Cars;
