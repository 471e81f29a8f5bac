//! Transports able to execute a read-only contract call.

use std::{future::Future, time::Duration};

use alloy_primitives::{Address, Bytes};
use jsonrpsee::{
    core::client::ClientT,
    http_client::{HttpClient, HttpClientBuilder},
    rpc_params,
};
use serde::{Deserialize, Serialize};

use crate::TransportError;

/// Block tag the registry is read at.
const LATEST: &str = "latest";

/// A read-only message call, as accepted by `eth_call`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// Caller identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Contract being called.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// ABI-encoded calldata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
}

impl CallRequest {
    /// Create a call from `from` to `to` carrying `data`.
    pub const fn new(from: Address, to: Address, data: Bytes) -> Self {
        Self { from: Some(from), to: Some(to), data: Some(data) }
    }
}

/// Executes read-only calls against the chain hosting the registry.
///
/// Implementations must be safe to share between concurrent validations.
pub trait RegistryTransport: Send + Sync {
    /// Execute `request` against the latest block and return the raw output.
    fn call(
        &self,
        request: CallRequest,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send;
}

/// [`RegistryTransport`] backed by a long-lived JSON-RPC HTTP client.
///
/// The client is built once and pools its connections internally, so a single
/// transport can serve every validation for the lifetime of the node.
#[derive(Clone)]
pub struct RpcTransport {
    endpoint: String,
    client: HttpClient,
}

impl std::fmt::Debug for RpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcTransport").field("endpoint", &self.endpoint).finish_non_exhaustive()
    }
}

impl RpcTransport {
    /// Build a transport for `endpoint` with the given per-request timeout.
    pub fn new(
        endpoint: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let endpoint = endpoint.into();
        let client = HttpClientBuilder::default()
            .request_timeout(request_timeout)
            .build(&endpoint)
            .map_err(|e| TransportError::Client {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { endpoint, client })
    }

    /// The endpoint this transport talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RegistryTransport for RpcTransport {
    async fn call(&self, request: CallRequest) -> Result<Bytes, TransportError> {
        let output: Bytes = self.client.request("eth_call", rpc_params![request, LATEST]).await?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_request_serializes_camel_case() {
        let request = CallRequest::new(
            Address::repeat_byte(0x01),
            Address::repeat_byte(0x02),
            Bytes::from_static(&[0xc2, 0x36, 0x97, 0xa8]),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["from"], "0x0101010101010101010101010101010101010101");
        assert_eq!(json["to"], "0x0202020202020202020202020202020202020202");
        assert_eq!(json["data"], "0xc23697a8");
    }

    #[test]
    fn call_request_skips_missing_fields() {
        let json = serde_json::to_string(&CallRequest::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[tokio::test]
    async fn rpc_transport_rejects_invalid_endpoint() {
        let Err(err) = RpcTransport::new("not a url", Duration::from_secs(1)) else {
            panic!("invalid endpoint accepted");
        };
        assert!(matches!(err, TransportError::Client { .. }));
    }

    #[tokio::test]
    async fn rpc_transport_keeps_endpoint() {
        let transport = RpcTransport::new("http://127.0.0.1:8545", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.endpoint(), "http://127.0.0.1:8545");
    }
}
