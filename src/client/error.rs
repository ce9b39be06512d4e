//! Errors raised while talking to the backend store.

use thiserror::Error;

/// Failure of a single downstream request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never produced an HTTP answer: connection refused,
    /// DNS failure, timeout, or a broken body stream.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("backend responded with status {status}: {message}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body, if any.
        message: String,
    },
}

impl BackendError {
    /// Returns `true` when the backend answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_404_is_not_found() {
        let missing = BackendError::Status {
            status: 404,
            message: String::new(),
        };
        let broken = BackendError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(missing.is_not_found());
        assert!(!broken.is_not_found());
        assert!(!BackendError::Transport("refused".to_string()).is_not_found());
    }
}
