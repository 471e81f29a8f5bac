//! Block body and post-execution state validation for warden nodes.

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod commitment;
pub use commitment::{CommitmentOracle, TrieCommitments, create_bloom};

mod error;
pub use error::{Disposition, ValidationError};

mod gas;
pub use gas::{GasLimitBounds, calc_gas_limit, max_gas_limit_delta};

mod spec;
pub use spec::{
    ChainSpec, GAS_LIMIT_BOUND_DIVISOR, GasLimitParams, MIN_GAS_LIMIT, TARGET_GAS_LIMIT,
};

mod traits;
pub use traits::{Block, BoxError, ChainReader, ConsensusEngine, WorldState};

mod validator;
pub use validator::BlockValidator;
