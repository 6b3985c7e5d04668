//! Mock transport for testing without network access.
//!
//! Serves canned response bodies matched by path and (optionally) a
//! subset of query parameters, and records every request it receives
//! so tests can assert which endpoints were hit.

use std::collections::BTreeMap;

use tokio::sync::Mutex;

use super::Transport;
use super::error::TransportError;

/// A request the mock transport received, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: BTreeMap<String, String>,
}

enum MockResponse {
    Body(String),
    Status(u16),
}

struct MockRule {
    path: String,
    /// Query entries that must all be present for the rule to match.
    query: BTreeMap<String, String>,
    response: MockResponse,
}

impl MockRule {
    fn matches(&self, path: &str, query: &BTreeMap<String, String>) -> bool {
        self.path == path
            && self
                .query
                .iter()
                .all(|(k, v)| query.get(k).is_some_and(|actual| actual == v))
    }
}

/// Canned-response transport.
///
/// Rules are checked in insertion order; the first match wins. A
/// request matching no rule fails with a synthetic 404 naming the path.
#[derive(Default)]
pub struct MockTransport {
    rules: Vec<MockRule>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to any GET on `path` with `body`.
    pub fn respond(mut self, path: &str, body: &str) -> Self {
        self.rules.push(MockRule {
            path: path.to_string(),
            query: BTreeMap::new(),
            response: MockResponse::Body(body.to_string()),
        });
        self
    }

    /// Respond with `body` only when the query contains `key=value`.
    pub fn respond_when(mut self, path: &str, key: &str, value: &str, body: &str) -> Self {
        self.rules.push(MockRule {
            path: path.to_string(),
            query: BTreeMap::from([(key.to_string(), value.to_string())]),
            response: MockResponse::Body(body.to_string()),
        });
        self
    }

    /// Fail any GET on `path` with the given status.
    pub fn fail(mut self, path: &str, status: u16) -> Self {
        self.rules.push(MockRule {
            path: path.to_string(),
            query: BTreeMap::new(),
            response: MockResponse::Status(status),
        });
        self
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

impl Transport for MockTransport {
    async fn get(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<String, TransportError> {
        self.requests.lock().await.push(RecordedRequest {
            path: path.to_string(),
            query: query.clone(),
        });

        let rule = self.rules.iter().find(|rule| rule.matches(path, query));

        match rule.map(|r| &r.response) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(TransportError::Status {
                status: *status,
                message: String::new(),
            }),
            None => Err(TransportError::Status {
                status: 404,
                message: format!("no mock response for {path}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(value: &str) -> BTreeMap<String, String> {
        BTreeMap::from([("term".to_string(), value.to_string())])
    }

    #[tokio::test]
    async fn matches_on_query_subset() {
        let mock = MockTransport::new()
            .respond_when("/station/search", "term", "a", "[1]")
            .respond_when("/station/search", "term", "b", "[2]");

        assert_eq!(mock.get("/station/search", &term("b")).await.unwrap(), "[2]");
        assert_eq!(mock.get("/station/search", &term("a")).await.unwrap(), "[1]");
    }

    #[tokio::test]
    async fn unmatched_path_is_an_error() {
        let mock = MockTransport::new();
        let err = mock.get("/pl/tp", &BTreeMap::new()).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn fail_rule_returns_status() {
        let mock = MockTransport::new().fail("/pl/tp", 500);
        let err = mock.get("/pl/tp", &BTreeMap::new()).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let mock = MockTransport::new().respond("/station/search", "[]");

        mock.get("/station/search", &term("first")).await.unwrap();
        mock.get("/station/search", &term("second")).await.unwrap();

        let requests = mock.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].query, term("first"));
        assert_eq!(requests[1].query, term("second"));
    }
}
