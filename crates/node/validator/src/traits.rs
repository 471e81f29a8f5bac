//! Collaborators the validator reads from but does not implement.

use std::error::Error;

use alloy_consensus::TxEnvelope;
use alloy_primitives::B256;

/// A block with Ethereum transactions.
pub type Block = alloy_consensus::Block<TxEnvelope>;

/// Opaque error raised by a collaborator.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Read access to the locally known chain.
pub trait ChainReader: Send + Sync {
    /// Whether the block with `hash` and its post-state are durably stored.
    fn has_block_and_state(&self, hash: B256) -> bool;
}

/// Consensus rules beyond what the validator checks itself.
pub trait ConsensusEngine: Send + Sync {
    /// Verify the uncle headers included in `block`.
    fn verify_uncles(&self, chain: &dyn ChainReader, block: &Block) -> Result<(), BoxError>;
}

/// World state left behind by executing a block.
pub trait WorldState {
    /// Commitment to the current state.
    ///
    /// With `delete_empty_objects` set, empty accounts are removed before the
    /// root is computed.
    fn intermediate_root(&self, delete_empty_objects: bool) -> B256;
}
