//! Chain specification consumed by validation.

use std::num::NonZeroU64;

/// Divisor bounding the per-block gas-limit change.
pub const GAS_LIMIT_BOUND_DIVISOR: NonZeroU64 = match NonZeroU64::new(1024) {
    Some(divisor) => divisor,
    None => unreachable!(),
};

/// Lowest gas limit a block may carry.
pub const MIN_GAS_LIMIT: u64 = 5000;

/// Gas limit that lightly used chains grow towards.
pub const TARGET_GAS_LIMIT: u64 = 4_712_388;

/// Gas-limit policy constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasLimitParams {
    /// A gas limit may move by less than `parent / bound_divisor` per block.
    pub bound_divisor: NonZeroU64,
    /// Floor for any suggested gas limit.
    pub min_gas_limit: u64,
    /// Limit grown towards while usage is low.
    pub target_gas_limit: u64,
}

impl GasLimitParams {
    /// Default gas-limit parameters.
    pub const DEFAULT: Self = Self {
        bound_divisor: GAS_LIMIT_BOUND_DIVISOR,
        min_gas_limit: MIN_GAS_LIMIT,
        target_gas_limit: TARGET_GAS_LIMIT,
    };
}

impl Default for GasLimitParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Chain rules needed to validate blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainSpec {
    /// Chain ID.
    pub chain_id: u64,
    /// First block whose state root is computed with EIP-158 empty-account
    /// deletion. `None` if the chain never activates it.
    pub eip158_block: Option<u64>,
    /// Gas-limit policy.
    pub gas_limit: GasLimitParams,
}

impl ChainSpec {
    /// Create a chain spec with EIP-158 active from genesis.
    pub const fn new(chain_id: u64) -> Self {
        Self { chain_id, eip158_block: Some(0), gas_limit: GasLimitParams::DEFAULT }
    }

    /// Set the EIP-158 activation block.
    #[must_use]
    pub const fn with_eip158_block(mut self, block: Option<u64>) -> Self {
        self.eip158_block = block;
        self
    }

    /// Set the gas-limit parameters.
    #[must_use]
    pub const fn with_gas_limit_params(mut self, params: GasLimitParams) -> Self {
        self.gas_limit = params;
        self
    }

    /// Whether EIP-158 state rules apply at block `number`.
    ///
    /// Once active they stay active for every later block.
    pub const fn is_eip158(&self, number: u64) -> bool {
        match self.eip158_block {
            Some(block) => number >= block,
            None => false,
        }
    }
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self::new(1)
    }
}
