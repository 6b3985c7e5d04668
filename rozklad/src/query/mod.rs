//! Query orchestration.
//!
//! Composes name resolution, parameter construction, the timetable
//! fetch and extraction into a single call. The two station names are
//! resolved strictly one after the other: when both are ambiguous, the
//! departure station's error is the one that surfaces, which is worth
//! more than the latency a parallel lookup would save.

use crate::options::QueryOptions;
use crate::stations::{self, StationError};
use crate::timetable::{self, InvalidRequest, TIMETABLE_PATH, TimetableRequest, TimetableResult};
use crate::transport::{Transport, TransportError};

/// Error from running a timetable query. All variants abort the whole
/// query; there is no partial result.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A station name could not be resolved to a unique code
    #[error(transparent)]
    Station(#[from] StationError),

    /// The timetable fetch itself failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Empty date or hour reached the query builder
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),
}

/// One-shot timetable query over an injected transport.
pub struct TimetableQuery<T> {
    transport: T,
}

impl<T: Transport> TimetableQuery<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Resolve both stations, fetch the timetable and extract its rows.
    ///
    /// Failures propagate immediately; no retries happen at this layer.
    pub async fn run(&self, options: &QueryOptions) -> Result<TimetableResult, QueryError> {
        let from = stations::resolve(&self.transport, &options.from).await?;
        let to = stations::resolve(&self.transport, &options.to).await?;

        let request = TimetableRequest::new(from, to, &options.date, &options.hour)?;

        tracing::debug!(from = %options.from, to = %options.to, date = %options.date, "fetching timetable");
        let body = self.transport.get(TIMETABLE_PATH, &request.params()).await?;

        Ok(timetable::extract(&body))
    }
}
