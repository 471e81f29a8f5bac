//! Producer authorization backed by an on-chain registry contract.

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::{AuthorityError, DecodeError, TransportError};

mod oracle;
pub use oracle::{
    AuthorityOptions, Authorization, AuthorizationOracle, CallOptions, ProducerAuthority,
};

pub mod registry;

mod transport;
pub use transport::{CallRequest, RegistryTransport, RpcTransport};
