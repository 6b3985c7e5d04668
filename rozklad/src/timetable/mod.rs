//! Timetable request construction and result extraction.

mod extract;
mod params;

pub use extract::{TimetableResult, extract};
pub use params::{InvalidRequest, TIMETABLE_PATH, TimetableRequest};
