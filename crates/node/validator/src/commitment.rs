//! Commitments over ordered block contents.

use alloy_consensus::{
    Header, ReceiptEnvelope, TxEnvelope, TxReceipt as _,
    proofs::{calculate_ommers_root, calculate_receipt_root, calculate_transaction_root},
};
use alloy_primitives::{B256, Bloom};

/// Computes the roots a header commits to.
///
/// Roots must be deterministic and depend on item order.
pub trait CommitmentOracle: Send + Sync {
    /// Root over the ordered transactions of a block.
    fn transactions_root(&self, transactions: &[TxEnvelope]) -> B256;

    /// Root over the ordered receipts produced by executing a block.
    fn receipts_root(&self, receipts: &[ReceiptEnvelope]) -> B256;

    /// Hash over the ordered uncle headers of a block.
    fn ommers_hash(&self, ommers: &[Header]) -> B256;
}

/// [`CommitmentOracle`] backed by the Ethereum ordered Merkle-Patricia trie.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrieCommitments;

impl CommitmentOracle for TrieCommitments {
    fn transactions_root(&self, transactions: &[TxEnvelope]) -> B256 {
        calculate_transaction_root(transactions)
    }

    fn receipts_root(&self, receipts: &[ReceiptEnvelope]) -> B256 {
        calculate_receipt_root(receipts)
    }

    fn ommers_hash(&self, ommers: &[Header]) -> B256 {
        calculate_ommers_root(ommers)
    }
}

/// OR together the blooms of every receipt.
pub fn create_bloom(receipts: &[ReceiptEnvelope]) -> Bloom {
    receipts.iter().fold(Bloom::ZERO, |mut bloom, receipt| {
        bloom.accrue_bloom(&receipt.bloom());
        bloom
    })
}
