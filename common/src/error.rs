use thiserror::Error;

/// Failure of a dashboard action.
///
/// `Validation` is raised before any request leaves the browser. Every other
/// variant describes a request that was issued and did not produce a usable
/// payload; views treat those uniformly as "request failed".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_)
                | ApiError::Timeout(_)
                | ApiError::Status { .. }
                | ApiError::Decode(_)
        )
    }

    pub(crate) fn decode(err: impl std::fmt::Display) -> Self {
        ApiError::Decode(err.to_string())
    }
}
