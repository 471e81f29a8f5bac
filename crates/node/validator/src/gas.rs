//! Gas-limit adjustment policy.
//!
//! [`calc_gas_limit`] is producer strategy, not consensus: it suggests the gas
//! limit of the next block. [`GasLimitBounds`] is the range any child's gas
//! limit must fall in, whatever the producer chose.

use std::num::NonZeroU64;

use alloy_consensus::Header;

use crate::{GasLimitParams, ValidationError};

/// Largest amount a gas limit may move from `parent_gas_limit` in one block.
///
/// Equal to `parent_gas_limit / divisor - 1`, saturating at zero for limits
/// smaller than the divisor. [`calc_gas_limit`] does not saturate.
pub const fn max_gas_limit_delta(parent_gas_limit: u64, divisor: NonZeroU64) -> u64 {
    (parent_gas_limit / divisor.get()).saturating_sub(1)
}

/// Suggest the gas limit of the block following `parent`.
///
/// When the parent used more than two thirds of its limit the suggestion rises,
/// below that it decays. A chain under the target limit instead grows towards
/// the target as fast as the bound allows.
///
/// Intermediate values are exact. For a parent limit below the divisor the
/// decay is `-1`, so the limit creeps up by one. The result is clamped to the
/// `u64` range.
pub fn calc_gas_limit(parent: &Header, params: &GasLimitParams) -> u64 {
    let divisor = i128::from(params.bound_divisor.get());
    let parent_limit = i128::from(parent.gas_limit);

    // contribution = parent_gas_used * 3 / 2 / divisor
    let contribution = i128::from(parent.gas_used) * 3 / 2 / divisor;
    // decay = parent_gas_limit / divisor - 1
    let decay = parent_limit / divisor - 1;

    let mut limit = (parent_limit - decay + contribution).max(i128::from(params.min_gas_limit));
    let target = i128::from(params.target_gas_limit);
    if limit < target {
        limit = (parent_limit + decay).min(target);
    }
    u64::try_from(limit.max(0)).unwrap_or(u64::MAX)
}

/// Inclusive range of gas limits a child of some parent may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GasLimitBounds {
    /// Lowest permitted gas limit.
    pub min: u64,
    /// Highest permitted gas limit.
    pub max: u64,
}

impl GasLimitBounds {
    /// Bounds for children of a block with `parent_gas_limit`.
    pub const fn from_parent(parent_gas_limit: u64, params: &GasLimitParams) -> Self {
        let delta = max_gas_limit_delta(parent_gas_limit, params.bound_divisor);
        Self {
            min: parent_gas_limit.saturating_sub(delta),
            max: parent_gas_limit.saturating_add(delta),
        }
    }

    /// Whether `gas_limit` lies within the bounds.
    pub const fn contains(&self, gas_limit: u64) -> bool {
        gas_limit >= self.min && gas_limit <= self.max
    }

    /// Reject `gas_limit` if it lies outside the bounds.
    pub fn check(&self, gas_limit: u64) -> Result<(), ValidationError> {
        if self.contains(gas_limit) {
            Ok(())
        } else {
            Err(ValidationError::GasLimitOutOfBounds { have: gas_limit, min: self.min, max: self.max })
        }
    }
}
