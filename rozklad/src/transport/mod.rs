//! HTTP transport over the fixed rozklad-pkp.pl host.
//!
//! The rest of the crate depends only on the [`Transport`] trait:
//! a GET against a path with query parameters, yielding the response
//! body. [`HttpTransport`] is the real client; [`MockTransport`] serves
//! canned responses for tests and offline development.

mod error;
mod http;
mod mock;

use std::collections::BTreeMap;
use std::future::Future;

pub use error::TransportError;
pub use http::{HttpTransport, TransportConfig};
pub use mock::{MockTransport, RecordedRequest};

/// A blocking-per-call GET collaborator over a single fixed host.
///
/// Implementations must treat non-success statuses as
/// [`TransportError::Status`]; callers only ever see successful bodies.
pub trait Transport {
    /// Issue a GET against `path` with `query` and return the body.
    fn get(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}
