//! Domain types for the timetable lookup.
//!
//! Value objects created per query and discarded after use. All types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod row;
mod station;

pub use row::TimetableRow;
pub use station::{InvalidStationCode, StationCode};
