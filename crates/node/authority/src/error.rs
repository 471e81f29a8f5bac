//! Error types for producer authorization queries.

use std::time::Duration;

use thiserror::Error;

/// The registry returned bytes that are not a single ABI-encoded `bool`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The call returned no data, usually because no contract is deployed at
    /// the registry address.
    #[error("empty registry response")]
    Empty,

    /// The response is not exactly one ABI word.
    #[error("registry response length mismatch: have {actual} bytes, want {expected}")]
    Length {
        /// Required length.
        expected: usize,
        /// Observed length.
        actual: usize,
    },

    /// A padding byte of the boolean word was set.
    #[error("registry response has non-zero padding at byte {offset}")]
    DirtyPadding {
        /// Offset of the first non-zero padding byte.
        offset: usize,
    },
}

/// The registry could not be reached or did not answer in time.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The JSON-RPC client failed (connection refused, HTTP error, RPC error object).
    #[error("registry rpc call failed: {0}")]
    Rpc(#[from] jsonrpsee::core::ClientError),

    /// The caller-supplied deadline elapsed before the call completed.
    #[error("registry call timed out after {0:?}")]
    Timeout(Duration),

    /// The client could not be constructed for the configured endpoint.
    #[error("failed to build registry client for {endpoint}: {reason}")]
    Client {
        /// Endpoint the client was built for.
        endpoint: String,
        /// Builder failure.
        reason: String,
    },

    /// Any other transport failure.
    #[error("registry transport error: {0}")]
    Other(String),
}

/// Errors returned by an authorization query.
///
/// A well-formed negative answer is not an error; see [`crate::Authorization`].
#[derive(Debug, Error)]
pub enum AuthorityError {
    /// The registry was unreachable. Retryable.
    #[error("authorization oracle unavailable: {0}")]
    Unavailable(#[from] TransportError),

    /// The registry answered with a malformed payload.
    #[error("authorization oracle returned malformed output: {0}")]
    Decode(#[from] DecodeError),
}

impl AuthorityError {
    /// Returns true if the query may succeed when retried.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
