//! Validation error types.

use alloy_primitives::{Address, B256, Bloom, Bytes};
use thiserror::Error;
use warden_authority::{AuthorityError, DecodeError, TransportError};

use crate::BoxError;

/// What the import pipeline should do with a block that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// The block is already known; drop it silently.
    Skip,
    /// The block may become valid later; queue it.
    Retry,
    /// The block is invalid.
    Reject,
}

/// Reasons a block fails body or state validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The block and its state are already stored.
    #[error("block already known: {0}")]
    KnownBlock(B256),

    /// The parent block or its state is missing.
    #[error("unknown ancestor: {0}")]
    UnknownAncestor(B256),

    /// The registry answered that the producer may not produce blocks.
    #[error("producer {producer} is not authorized (registry response {response})")]
    ProducerNotAuthorized {
        /// Block beneficiary.
        producer: Address,
        /// Raw registry output.
        response: Bytes,
    },

    /// The registry could not be reached.
    #[error("authorization oracle unavailable: {0}")]
    OracleUnavailable(#[source] TransportError),

    /// The registry answered with a malformed payload.
    #[error("authorization oracle returned malformed output: {0}")]
    OracleDecode(#[source] DecodeError),

    /// Uncle verification failed in the consensus engine.
    #[error(transparent)]
    Consensus(BoxError),

    /// Ommers hash differs from the header.
    #[error("uncle root hash mismatch: have {have}, want {want}")]
    UncleRootMismatch {
        /// Recomputed value.
        have: B256,
        /// Header value.
        want: B256,
    },

    /// Transactions root differs from the header.
    #[error("transaction root hash mismatch: have {have}, want {want}")]
    TxRootMismatch {
        /// Recomputed value.
        have: B256,
        /// Header value.
        want: B256,
    },

    /// Gas used by execution differs from the header.
    #[error("gas used mismatch: have {have}, want {want}")]
    GasUsedMismatch {
        /// Gas used by execution.
        have: u64,
        /// Header value.
        want: u64,
    },

    /// Union of receipt blooms differs from the header.
    #[error("bloom mismatch: have {have}, want {want}")]
    BloomMismatch {
        /// Recomputed value.
        have: Bloom,
        /// Header value.
        want: Bloom,
    },

    /// Receipts root differs from the header.
    #[error("receipt root hash mismatch: have {have}, want {want}")]
    ReceiptRootMismatch {
        /// Recomputed value.
        have: B256,
        /// Header value.
        want: B256,
    },

    /// Post-state root differs from the header.
    #[error("state root mismatch: have {have}, want {want}")]
    StateRootMismatch {
        /// Recomputed value.
        have: B256,
        /// Header value.
        want: B256,
    },

    /// Gas limit moved further from the parent than allowed.
    #[error("gas limit {have} outside [{min}, {max}]")]
    GasLimitOutOfBounds {
        /// Declared gas limit.
        have: u64,
        /// Lowest permitted.
        min: u64,
        /// Highest permitted.
        max: u64,
    },
}

impl ValidationError {
    /// The action the caller should take.
    pub const fn disposition(&self) -> Disposition {
        match self {
            Self::KnownBlock(_) => Disposition::Skip,
            Self::UnknownAncestor(_) | Self::OracleUnavailable(_) => Disposition::Retry,
            _ => Disposition::Reject,
        }
    }
}

impl From<AuthorityError> for ValidationError {
    fn from(err: AuthorityError) -> Self {
        match err {
            AuthorityError::Unavailable(e) => Self::OracleUnavailable(e),
            AuthorityError::Decode(e) => Self::OracleDecode(e),
        }
    }
}
