//! Configuration types for warden nodes.
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod authority;
pub use authority::{
    AuthorityConfig, DEFAULT_CALLER_ADDRESS, DEFAULT_ENDPOINT, DEFAULT_REGISTRY_ADDRESS,
    DEFAULT_REQUEST_TIMEOUT_MS,
};

mod chain;
pub use chain::{
    ChainConfig, DEFAULT_CHAIN_ID, DEFAULT_EIP158_BLOCK, DEFAULT_GAS_LIMIT_BOUND_DIVISOR,
    DEFAULT_MIN_GAS_LIMIT, DEFAULT_TARGET_GAS_LIMIT,
};

mod error;
pub use error::ConfigError;

mod node;
pub use node::NodeConfig;
