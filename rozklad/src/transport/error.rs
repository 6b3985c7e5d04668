//! Transport error types.

/// Errors from the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = TransportError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "unexpected status 503: Service Unavailable");
    }
}
