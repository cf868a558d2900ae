//! Error type definitions.
//!
//! Two kinds of failure matter to callers of the pipeline: the lookup never
//! produced a usable body (transport error or non-success status), or it
//! produced one we could not read (malformed JSON, missing mandatory
//! field). Neither is recovered or retried internally; the caller's
//! invalidate/refetch path decides whether to try again.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors surfaced by the snapshot pipeline.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The outbound request failed to complete.
    #[error("{service} request failed: {source}")]
    Request {
        /// Which lookup failed.
        service: &'static str,
        /// The underlying transport error.
        #[source]
        source: ReqwestError,
    },

    /// The service answered with a non-success status.
    #[error("{service} returned HTTP {status}")]
    Status {
        /// Which lookup failed.
        service: &'static str,
        /// The status the service answered with.
        status: StatusCode,
    },

    /// The response body was not the JSON we expected.
    #[error("{service} response could not be decoded: {reason}")]
    Parse {
        /// Which lookup failed.
        service: &'static str,
        /// What went wrong while decoding.
        reason: String,
    },
}

impl SnapshotError {
    pub(crate) fn request(service: &'static str, source: ReqwestError) -> Self {
        SnapshotError::Request { service, source }
    }

    pub(crate) fn status(service: &'static str, status: StatusCode) -> Self {
        SnapshotError::Status { service, status }
    }

    pub(crate) fn parse(service: &'static str, reason: impl Into<String>) -> Self {
        SnapshotError::Parse {
            service,
            reason: reason.into(),
        }
    }

    /// True for the transport/status arm of the taxonomy.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            SnapshotError::Request { .. } | SnapshotError::Status { .. }
        )
    }

    /// True for the malformed-body arm.
    pub fn is_parse(&self) -> bool {
        matches!(self, SnapshotError::Parse { .. })
    }
}
