//! Block body and post-execution state validation.

use std::{fmt, sync::Arc};

use alloy_consensus::{Header, ReceiptEnvelope};
use alloy_primitives::{Address, B256};
use tracing::{debug, warn};
use warden_authority::{CallOptions, ProducerAuthority};

use crate::{
    Block, ChainReader, ChainSpec, CommitmentOracle, ConsensusEngine, GasLimitBounds,
    TrieCommitments, ValidationError, WorldState, create_bloom,
};

/// Validates block bodies before execution and block state after it.
///
/// Holds only shared handles to its collaborators, so a single validator can be
/// cloned or put behind an [`Arc`] and used to validate many blocks concurrently.
pub struct BlockValidator<C, E, A, O = TrieCommitments> {
    spec: Arc<ChainSpec>,
    chain: Arc<C>,
    engine: Arc<E>,
    authority: Arc<A>,
    commitments: Arc<O>,
}

impl<C, E, A> BlockValidator<C, E, A> {
    /// Create a validator computing commitments with the Ethereum trie.
    pub fn new(spec: Arc<ChainSpec>, chain: Arc<C>, engine: Arc<E>, authority: Arc<A>) -> Self {
        Self { spec, chain, engine, authority, commitments: Arc::new(TrieCommitments) }
    }
}

impl<C, E, A, O> BlockValidator<C, E, A, O> {
    /// Replace the commitment oracle.
    pub fn with_commitments<O2>(self, commitments: Arc<O2>) -> BlockValidator<C, E, A, O2> {
        BlockValidator {
            spec: self.spec,
            chain: self.chain,
            engine: self.engine,
            authority: self.authority,
            commitments,
        }
    }

    /// The chain spec blocks are validated against.
    pub fn spec(&self) -> &ChainSpec {
        &self.spec
    }
}

impl<C, E, A, O> Clone for BlockValidator<C, E, A, O> {
    fn clone(&self) -> Self {
        Self {
            spec: Arc::clone(&self.spec),
            chain: Arc::clone(&self.chain),
            engine: Arc::clone(&self.engine),
            authority: Arc::clone(&self.authority),
            commitments: Arc::clone(&self.commitments),
        }
    }
}

impl<C, E, A, O> fmt::Debug for BlockValidator<C, E, A, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockValidator").field("spec", &self.spec).finish_non_exhaustive()
    }
}

impl<C, E, A, O> BlockValidator<C, E, A, O>
where
    C: ChainReader,
    E: ConsensusEngine,
    A: ProducerAuthority,
    O: CommitmentOracle,
{
    /// Validate the body of `block` with no deadline on the authorization query.
    ///
    /// See [`Self::validate_body_with`].
    pub async fn validate_body(&self, block: &Block) -> Result<(), ValidationError> {
        self.validate_body_with(block, CallOptions::unbounded()).await
    }

    /// Validate that `block` is new, links to a known parent, was produced by an
    /// authorized producer, and that its uncles and transactions match the
    /// header.
    ///
    /// The header itself is assumed to have been verified already. Checks run
    /// in a fixed order and the first failure is returned.
    pub async fn validate_body_with(
        &self,
        block: &Block,
        options: CallOptions,
    ) -> Result<(), ValidationError> {
        let header = &block.header;
        let hash = header.hash_slow();

        self.check_body(hash, block, options).await.inspect_err(|e| {
            debug!(number = header.number, %hash, error = %e, "block body rejected")
        })
    }

    async fn check_body(
        &self,
        hash: B256,
        block: &Block,
        options: CallOptions,
    ) -> Result<(), ValidationError> {
        let header = &block.header;

        if self.chain.has_block_and_state(hash) {
            return Err(ValidationError::KnownBlock(hash));
        }
        if !self.chain.has_block_and_state(header.parent_hash) {
            return Err(ValidationError::UnknownAncestor(header.parent_hash));
        }

        self.authorize(header.beneficiary, options).await?;

        self.engine.verify_uncles(&*self.chain, block).map_err(ValidationError::Consensus)?;

        let ommers_hash = self.commitments.ommers_hash(&block.body.ommers);
        if ommers_hash != header.ommers_hash {
            return Err(ValidationError::UncleRootMismatch {
                have: ommers_hash,
                want: header.ommers_hash,
            });
        }

        let tx_root = self.commitments.transactions_root(&block.body.transactions);
        if tx_root != header.transactions_root {
            return Err(ValidationError::TxRootMismatch {
                have: tx_root,
                want: header.transactions_root,
            });
        }

        Ok(())
    }

    /// Fail unless the registry currently authorizes `producer`.
    ///
    /// Any oracle failure rejects the block.
    async fn authorize(&self, producer: Address, options: CallOptions) -> Result<(), ValidationError> {
        let answer = self.authority.is_authorized(producer, options).await?;
        if !answer.authorized {
            warn!(%producer, response = %answer.response, "producer not authorized");
            return Err(ValidationError::ProducerNotAuthorized {
                producer,
                response: answer.response,
            });
        }
        Ok(())
    }
}

impl<C, E, A, O: CommitmentOracle> BlockValidator<C, E, A, O> {
    /// Validate the outcome of executing `block` on top of `parent`.
    ///
    /// `state` is the world state after execution, `receipts` the receipts in
    /// transaction order and `used_gas` the total gas consumed. Performs no I/O.
    ///
    /// `parent` is only recorded when the block is rejected; no check here
    /// depends on it. Parent-relative gas-limit rules live in
    /// [`Self::validate_gas_limit`].
    pub fn validate_state<S: WorldState + ?Sized>(
        &self,
        block: &Block,
        parent: &Header,
        state: &S,
        receipts: &[ReceiptEnvelope],
        used_gas: u64,
    ) -> Result<(), ValidationError> {
        let header = &block.header;

        let result = self.check_state(header, state, receipts, used_gas);
        if let Err(e) = &result {
            debug!(
                number = header.number,
                parent = parent.number,
                error = %e,
                "block state rejected"
            );
        }
        result
    }

    fn check_state<S: WorldState + ?Sized>(
        &self,
        header: &Header,
        state: &S,
        receipts: &[ReceiptEnvelope],
        used_gas: u64,
    ) -> Result<(), ValidationError> {
        if used_gas != header.gas_used {
            return Err(ValidationError::GasUsedMismatch { have: used_gas, want: header.gas_used });
        }

        let bloom = create_bloom(receipts);
        if bloom != header.logs_bloom {
            return Err(ValidationError::BloomMismatch { have: bloom, want: header.logs_bloom });
        }

        let receipts_root = self.commitments.receipts_root(receipts);
        if receipts_root != header.receipts_root {
            return Err(ValidationError::ReceiptRootMismatch {
                have: receipts_root,
                want: header.receipts_root,
            });
        }

        let state_root = state.intermediate_root(self.spec.is_eip158(header.number));
        if state_root != header.state_root {
            return Err(ValidationError::StateRootMismatch {
                have: state_root,
                want: header.state_root,
            });
        }

        Ok(())
    }

    /// Check that `header` keeps its gas limit within the bounds set by `parent`.
    pub fn validate_gas_limit(&self, header: &Header, parent: &Header) -> Result<(), ValidationError> {
        GasLimitBounds::from_parent(parent.gas_limit, &self.spec.gas_limit).check(header.gas_limit)
    }
}
