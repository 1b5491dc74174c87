use thiserror::Error;

/// Failure to reach the backend or to understand its answer.
///
/// Produced at the HTTP boundary of the front-end; a response that parsed but carried
/// `success: false` is not a `NetworkError` (see [`SubmitError::Server`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Unreachable(String),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("unexpected status {0}")]
    Status(u16),
}

/// A form field that failed a client-side constraint.
///
/// `field` is the `name` attribute of the offending input; `reason` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Every way a submission can end without success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("server rejected the request: {0}")]
    Server(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_its_reason_only() {
        let err = ValidationError::new("token", "Please enter a payment token");
        assert_eq!(err.to_string(), "Please enter a payment token");
        assert_eq!(err.field, "token");
    }

    #[test]
    fn submit_error_wraps_network_errors_transparently() {
        let err: SubmitError = NetworkError::Timeout(30_000).into();
        assert_eq!(err.to_string(), "request timed out after 30000 ms");
    }
}
