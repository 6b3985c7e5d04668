//! Station name resolution.
//!
//! The remote planner addresses stations by opaque codes, not names.
//! This module turns a free-text name into a code via the site's
//! search endpoint, insisting on a unique match.

mod error;
mod resolver;

pub use error::StationError;
pub use resolver::{StationCandidate, resolve};
