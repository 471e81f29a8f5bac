//! Chain configuration.

use serde::{Deserialize, Serialize};

/// Default chain identifier.
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Default block at which the EIP-158 state-root rules activate.
pub const DEFAULT_EIP158_BLOCK: u64 = 2_675_000;

/// Default gas-limit bound divisor.
pub const DEFAULT_GAS_LIMIT_BOUND_DIVISOR: u64 = 1024;

/// Default minimum gas limit.
pub const DEFAULT_MIN_GAS_LIMIT: u64 = 5000;

/// Default target gas limit block producers grow towards.
pub const DEFAULT_TARGET_GAS_LIMIT: u64 = 4_712_388;

/// Chain constants consumed by block validation and the gas-limit policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainConfig {
    /// Chain identifier.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// First block using EIP-158 state-root rules. `None` never activates them.
    #[serde(default = "default_eip158_block")]
    pub eip158_block: Option<u64>,

    /// Divisor bounding how far a gas limit may move per block.
    #[serde(default = "default_gas_limit_bound_divisor")]
    pub gas_limit_bound_divisor: u64,

    /// Lowest gas limit a block may carry.
    #[serde(default = "default_min_gas_limit")]
    pub min_gas_limit: u64,

    /// Gas limit that lightly used chains grow towards.
    #[serde(default = "default_target_gas_limit")]
    pub target_gas_limit: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            eip158_block: Some(DEFAULT_EIP158_BLOCK),
            gas_limit_bound_divisor: DEFAULT_GAS_LIMIT_BOUND_DIVISOR,
            min_gas_limit: DEFAULT_MIN_GAS_LIMIT,
            target_gas_limit: DEFAULT_TARGET_GAS_LIMIT,
        }
    }
}

const fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

const fn default_eip158_block() -> Option<u64> {
    Some(DEFAULT_EIP158_BLOCK)
}

const fn default_gas_limit_bound_divisor() -> u64 {
    DEFAULT_GAS_LIMIT_BOUND_DIVISOR
}

const fn default_min_gas_limit() -> u64 {
    DEFAULT_MIN_GAS_LIMIT
}

const fn default_target_gas_limit() -> u64 {
    DEFAULT_TARGET_GAS_LIMIT
}
