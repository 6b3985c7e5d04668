//! PKP timetable lookup over rozklad-pkp.pl.
//!
//! Answers: "which trains run from A to B around this time?"
//! Free-text station names are resolved to station codes via the
//! site's search endpoint, the HAFAS timetable form is queried, and
//! departures are extracted from the result markup.

pub mod domain;
pub mod options;
pub mod query;
pub mod stations;
pub mod timetable;
pub mod transport;
