//! Shared error type across visicount crates.

use thiserror::Error;

/// Stable error kinds, so callers can discriminate failures without matching
/// on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The inbound event is missing a required field.
    Validation,
    /// The counter record does not exist.
    NotFound,
    /// The backing store failed or returned something unusable.
    Store,
    /// Anything else (overflow, serialization).
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Store => "STORE",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    /// HTTP status code the handler answers with for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Store | ErrorKind::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum CounterError {
    #[error("{0}")]
    Validation(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("store: {0}")]
    Store(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl CounterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CounterError::Validation(_) => ErrorKind::Validation,
            CounterError::NotFound(_) => ErrorKind::NotFound,
            CounterError::Store(_) => ErrorKind::Store,
            CounterError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<serde_json::Error> for CounterError {
    fn from(e: serde_json::Error) -> Self {
        CounterError::Internal(format!("json: {e}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_status() {
        assert_eq!(CounterError::Validation("x".into()).kind().status_code(), 400);
        assert_eq!(CounterError::NotFound("0".into()).kind().status_code(), 404);
        assert_eq!(CounterError::Store("down".into()).kind().status_code(), 500);
        assert_eq!(CounterError::Internal("overflow".into()).kind().status_code(), 500);
    }

    #[test]
    fn display_carries_detail() {
        let e = CounterError::Store("connection refused".into());
        assert_eq!(e.to_string(), "store: connection refused");
        assert_eq!(e.kind().as_str(), "STORE");
    }
}
