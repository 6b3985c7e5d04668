//! Station resolution error types.

use crate::domain::InvalidStationCode;
use crate::transport::TransportError;

/// Errors that can occur while resolving a station name to a code.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The search matched zero or more than one station; the caller
    /// cannot disambiguate automatically, so this is a hard stop.
    #[error("ambiguous station name \"{name}\" ({matches} matches)")]
    Ambiguous { name: String, matches: usize },

    /// Transport failure while querying the search endpoint
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The search response was not the expected JSON candidate list
    #[error("station search returned malformed JSON: {message}")]
    Json { message: String },

    /// The unique candidate carried an unusable code
    #[error("station search returned an invalid code: {0}")]
    InvalidCode(#[from] InvalidStationCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguous_display_names_the_input() {
        let err = StationError::Ambiguous {
            name: "Warszawa".into(),
            matches: 3,
        };
        assert_eq!(
            err.to_string(),
            "ambiguous station name \"Warszawa\" (3 matches)"
        );
    }
}
