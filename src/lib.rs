//! Lu Shu numerology calculations.
//!
//! A date of birth goes in; Mulank, Destiny Number, the Lu Shu grid and its
//! planes, missing numbers, a personality classification and lucky numbers
//! come out. Every function here is pure.

pub mod core_numbers;
pub mod date;
pub mod digits;
pub mod error;
pub mod grid;
pub mod lucky;
pub mod personality;
pub mod planes;
pub mod reading;
pub mod reference;
pub mod report;

pub use date::BirthDate;
pub use error::NumerologyError;
pub use reading::{calculate_reading, calculate_reading_from_iso, Reading};
