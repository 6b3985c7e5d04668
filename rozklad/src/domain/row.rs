//! Timetable row value object.

use chrono::NaiveTime;

/// One scheduled journey: departure and arrival times plus the label
/// of the train serving it (e.g. `"IC 100"`).
///
/// Produced only by the timetable extractor and immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableRow {
    /// Departure time at the origin station.
    pub departure: NaiveTime,
    /// Arrival time at the target station.
    pub arrival: NaiveTime,
    /// Human-readable train identifier.
    pub train: String,
}
