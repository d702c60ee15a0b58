//! Error model for catalog reads.

use thiserror::Error;

/// Result type returned by transports.
pub type TransportResult<T> = Result<T, TransportError>;

/// Why an outbound read was rejected.
///
/// Transports map their own failures onto these variants. The catalog layer
/// never branches on them; every variant collapses into a [`FetchFailure`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, reset, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("API error ({0}): {1}")]
    Status(u16, String),

    /// The response body was not valid JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// The single failure kind of a catalog load.
///
/// The reason is kept for logging only; it is never inspected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("catalog fetch failed: {reason}")]
pub struct FetchFailure {
    reason: String,
}

impl FetchFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<TransportError> for FetchFailure {
    fn from(err: TransportError) -> Self {
        Self::new(err.to_string())
    }
}
