use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("failed to authorize with JWT: {0}")]
    Exchange(String),

    #[error("invalid service account key: {0}")]
    InvalidKey(String),

    #[error("invalid access token: {0}")]
    InvalidToken(String),
}
