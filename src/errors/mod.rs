//! Error types for price source calls.
//!
//! This module provides:
//! - [`MarketDataError`]: the error enum for all outbound price source calls
//! - [`FailureKind`]: coarse classification used for per-shard failure markers

mod failure;

pub use failure::FailureKind;

use thiserror::Error;

/// Errors that can occur while talking to a price source.
///
/// A resolver miss is not represented here: "no catalog match" is a normal
/// outcome carried by [`Resolution`](crate::resolver::Resolution). Each
/// variant classifies into a [`FailureKind`] via
/// [`failure_kind`](Self::failure_kind), which is what ends up on a shard's
/// failure marker in fallback mode.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The call did not complete within its deadline.
    #[error("Timeout: {source_name}")]
    Timeout {
        /// The source that timed out ("unified" or a shard name)
        source_name: String,
    },

    /// The source answered with a non-success status or the transport failed
    /// mid-request.
    #[error("Source error: {source_name} - {message}")]
    SourceError {
        /// The source that returned the error
        source_name: String,
        /// Description of the failure
        message: String,
    },

    /// The payload could not be decoded into the expected shape.
    #[error("Malformed response from {source_name}: {message}")]
    MalformedResponse {
        /// The source that produced the payload
        source_name: String,
        /// The decode error
        message: String,
    },

    /// A network error occurred before any response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Classify this error for a per-shard failure marker.
    ///
    /// Timeouts are kept distinct from other transport failures; decode
    /// failures are their own kind but are handled at the same scope as
    /// transport failures everywhere in the aggregator.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::SourceError { .. } => FailureKind::Transport,
            Self::MalformedResponse { .. } => FailureKind::MalformedResponse,
            Self::Network(e) if e.is_timeout() => FailureKind::Timeout,
            Self::Network(_) => FailureKind::Transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_classifies_as_timeout() {
        let error = MarketDataError::Timeout {
            source_name: "unified".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Timeout);
    }

    #[test]
    fn test_source_error_classifies_as_transport() {
        let error = MarketDataError::SourceError {
            source_name: "Emberfall".to_string(),
            message: "HTTP error: 500".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::Transport);
    }

    #[test]
    fn test_malformed_response_classifies_as_malformed() {
        let error = MarketDataError::MalformedResponse {
            source_name: "unified".to_string(),
            message: "missing field `listings`".to_string(),
        };
        assert_eq!(error.failure_kind(), FailureKind::MalformedResponse);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::Timeout {
            source_name: "unified".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: unified");

        let error = MarketDataError::SourceError {
            source_name: "Caldera".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Source error: Caldera - connection refused"
        );

        let error = MarketDataError::MalformedResponse {
            source_name: "unified".to_string(),
            message: "expected a map".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Malformed response from unified: expected a map"
        );
    }
}
