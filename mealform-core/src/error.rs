use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuServiceError {
    /// The request never produced a response (DNS, refused connection, reset...).
    #[error("transport error: {0}")]
    Transport(String),

    #[error("service responded with status {status}")]
    Service { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

impl MenuServiceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            MenuServiceError::Transport(_) => FailureKind::Transport,
            MenuServiceError::Service { .. } => FailureKind::Service,
            MenuServiceError::MalformedResponse(_) => FailureKind::MalformedResponse,
            MenuServiceError::Timeout(_) => FailureKind::Timeout,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Service,
    MalformedResponse,
    Timeout,
    // Service implementation panicked, or the submit was dropped mid-flight.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(MenuServiceError::Transport("x".into()).kind(), FailureKind::Transport);
        assert_eq!(
            MenuServiceError::Service {
                status: 500,
                body: String::new()
            }
            .kind(),
            FailureKind::Service
        );
        assert_eq!(
            MenuServiceError::MalformedResponse("x".into()).kind(),
            FailureKind::MalformedResponse
        );
        assert_eq!(
            MenuServiceError::Timeout(Duration::from_secs(1)).kind(),
            FailureKind::Timeout
        );
    }

    #[test]
    fn service_error_display_omits_body() {
        let e = MenuServiceError::Service {
            status: 502,
            body: "upstream stack trace".into(),
        };
        assert_eq!(e.to_string(), "service responded with status 502");
    }
}
