//! Producer registry configuration.

use alloy_primitives::{Address, address};
use serde::{Deserialize, Serialize};

/// Default JSON-RPC endpoint serving the registry contract.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8545";

/// Default address of the deployed producer registry contract.
pub const DEFAULT_REGISTRY_ADDRESS: Address = address!("5D48d85Cbad801d76523DD1A890af2B5ee18D08b");

/// Default `from` address used for registry calls.
pub const DEFAULT_CALLER_ADDRESS: Address = address!("3B58E3ED47DA422CFEEFE5EB47CA44E43E3757E6");

/// Default transport-level request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Producer registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorityConfig {
    /// HTTP JSON-RPC endpoint of a node that can execute `eth_call`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Address of the registry contract.
    #[serde(default = "default_registry_address")]
    pub registry_address: Address,

    /// Caller identity for the read-only registry call.
    #[serde(default = "default_caller_address")]
    pub caller_address: Address,

    /// Timeout applied by the HTTP client to every request.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Deadline applied to each authorization query. Unset means no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_timeout_ms: Option<u64>,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            registry_address: DEFAULT_REGISTRY_ADDRESS,
            caller_address: DEFAULT_CALLER_ADDRESS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            call_timeout_ms: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_registry_address() -> Address {
    DEFAULT_REGISTRY_ADDRESS
}

const fn default_caller_address() -> Address {
    DEFAULT_CALLER_ADDRESS
}

const fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}
