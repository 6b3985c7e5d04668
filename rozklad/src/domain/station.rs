//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// An opaque station identifier within the remote journey planner.
///
/// Codes are obtained from the station-search endpoint, never typed by
/// users. The remote addressing scheme is opaque (observed codes are
/// numeric tokens such as `5100066`, but that is not guaranteed), so
/// the only invariant this type enforces is that a code is non-empty.
///
/// # Examples
///
/// ```
/// use rozklad::domain::StationCode;
///
/// let code = StationCode::parse("5100066").unwrap();
/// assert_eq!(code.as_str(), "5100066");
///
/// // An empty code is rejected
/// assert!(StationCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        Ok(StationCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
