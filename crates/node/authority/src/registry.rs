//! ABI codec for the producer registry contract.
//!
//! The registry exposes three methods:
//!
//! | method                 | mutability | used here |
//! |------------------------|------------|-----------|
//! | `check(address) bool`  | view       | yes       |
//! | `addMiner(address)`    | mutating   | no        |
//! | `removeMiner(address)` | mutating   | no        |
//!
//! Only `check` is ever encoded into a call. The administrative selectors are
//! exported so tooling can recognise registry transactions.

use alloy_primitives::{Address, Bytes, FixedBytes, keccak256};

use crate::DecodeError;

/// Size of one ABI word.
pub const WORD_SIZE: usize = 32;

/// Canonical signature of the read-only authorization query.
pub const CHECK_SIGNATURE: &str = "check(address)";

/// Canonical signature of the administrative grant method.
pub const ADD_MINER_SIGNATURE: &str = "addMiner(address)";

/// Canonical signature of the administrative revoke method.
pub const REMOVE_MINER_SIGNATURE: &str = "removeMiner(address)";

/// Compute the 4-byte function selector for a canonical signature.
pub fn selector(signature: &str) -> FixedBytes<4> {
    FixedBytes::from_slice(&keccak256(signature.as_bytes())[..4])
}

/// Encode calldata for `check(producer)`.
///
/// Layout: selector followed by the address as one ABI word, i.e. twelve zero
/// bytes and then the twenty address bytes.
pub fn encode_check_call(producer: Address) -> Bytes {
    let mut data = Vec::with_capacity(4 + WORD_SIZE);
    data.extend_from_slice(selector(CHECK_SIGNATURE).as_slice());
    data.extend_from_slice(producer.into_word().as_slice());
    data.into()
}

/// Decode the single `bool` returned by `check`.
///
/// The output must be exactly one word whose 31 leading bytes are zero. The
/// value is `true` iff the final byte is non-zero.
pub fn decode_check_output(output: &[u8]) -> Result<bool, DecodeError> {
    if output.is_empty() {
        return Err(DecodeError::Empty);
    }
    if output.len() != WORD_SIZE {
        return Err(DecodeError::Length { expected: WORD_SIZE, actual: output.len() });
    }
    let (padding, value) = output.split_at(WORD_SIZE - 1);
    if let Some(offset) = padding.iter().position(|byte| *byte != 0) {
        return Err(DecodeError::DirtyPadding { offset });
    }
    Ok(value[0] != 0)
}
