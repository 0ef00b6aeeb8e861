use thiserror::Error;

/// A failed remote read of the roster range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("remote returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("token renewal failed: {0}")]
    Auth(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let error = TransportError::Status {
            status: 403,
            body: "PERMISSION_DENIED".to_string(),
        };
        assert_eq!(error.to_string(), "remote returned 403: PERMISSION_DENIED");
    }
}
