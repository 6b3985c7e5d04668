//! Free-text station name → station code.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::StationCode;
use crate::transport::Transport;

use super::error::StationError;

/// Path of the station search endpoint.
const SEARCH_PATH: &str = "/station/search";

/// One candidate from the station search response.
///
/// The endpoint returns more fields than this; only the code and the
/// display label are of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct StationCandidate {
    /// The station code.
    pub value: String,
    /// Human-readable station name.
    pub label: Option<String>,
}

/// Resolve a free-text station name to its unique station code.
///
/// Issues one search request per call; nothing is cached. A search
/// returning zero or several candidates fails with
/// [`StationError::Ambiguous`] carrying the original name.
pub async fn resolve(
    transport: &impl Transport,
    name: &str,
) -> Result<StationCode, StationError> {
    let query = BTreeMap::from([("term".to_string(), name.to_string())]);
    let body = transport.get(SEARCH_PATH, &query).await?;

    let candidates: Vec<StationCandidate> =
        serde_json::from_str(&body).map_err(|e| StationError::Json {
            message: e.to_string(),
        })?;

    match candidates.as_slice() {
        [only] => Ok(StationCode::parse(&only.value)?),
        _ => Err(StationError::Ambiguous {
            name: name.to_string(),
            matches: candidates.len(),
        }),
    }
}
