//! Producer authorization oracle.

use std::{future::Future, time::Duration};

use alloy_primitives::{Address, Bytes};
use tracing::{debug, warn};

use crate::{
    AuthorityError, CallRequest, RegistryTransport, RpcTransport, TransportError,
    registry::{decode_check_output, encode_check_call},
};

/// Where the registry lives and who calls it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorityOptions {
    /// Registry contract address.
    pub registry: Address,
    /// `from` address of every registry call.
    pub caller: Address,
}

impl AuthorityOptions {
    /// Create options for the registry at `registry`, called from `caller`.
    pub const fn new(registry: Address, caller: Address) -> Self {
        Self { registry, caller }
    }
}

/// Per-query options supplied by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Deadline for the query. `None` waits for the transport.
    pub timeout: Option<Duration>,
}

impl CallOptions {
    /// Options with no deadline.
    pub const fn unbounded() -> Self {
        Self { timeout: None }
    }

    /// Options bounding the query by `timeout`.
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self { timeout: Some(timeout) }
    }
}

/// A well-formed answer from the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Authorization {
    /// Whether the producer may extend the chain.
    pub authorized: bool,
    /// Raw registry output, kept for diagnostics.
    pub response: Bytes,
}

/// Decides whether a producer may extend the chain.
pub trait ProducerAuthority: Send + Sync {
    /// Query the current authorization of `producer`.
    ///
    /// A negative answer is `Ok` with `authorized == false`; errors mean the
    /// answer could not be obtained.
    fn is_authorized(
        &self,
        producer: Address,
        options: CallOptions,
    ) -> impl Future<Output = Result<Authorization, AuthorityError>> + Send;
}

/// Queries the on-chain producer registry through a [`RegistryTransport`].
///
/// Every query goes to the registry; answers are never cached, so grants and
/// revocations take effect on the next validated block.
#[derive(Clone, Debug)]
pub struct AuthorizationOracle<T = RpcTransport> {
    transport: T,
    options: AuthorityOptions,
}

impl<T> AuthorizationOracle<T> {
    /// Create an oracle over `transport`.
    pub const fn new(transport: T, options: AuthorityOptions) -> Self {
        Self { transport, options }
    }

    /// The registry options.
    pub const fn options(&self) -> &AuthorityOptions {
        &self.options
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

impl AuthorizationOracle<RpcTransport> {
    /// Connect an oracle to the JSON-RPC endpoint at `endpoint`.
    pub fn connect(
        endpoint: impl Into<String>,
        request_timeout: Duration,
        options: AuthorityOptions,
    ) -> Result<Self, TransportError> {
        Ok(Self::new(RpcTransport::new(endpoint, request_timeout)?, options))
    }
}

impl<T: RegistryTransport> ProducerAuthority for AuthorizationOracle<T> {
    async fn is_authorized(
        &self,
        producer: Address,
        options: CallOptions,
    ) -> Result<Authorization, AuthorityError> {
        let request =
            CallRequest::new(self.options.caller, self.options.registry, encode_check_call(producer));

        let call = self.transport.call(request);
        let result = match options.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .unwrap_or(Err(TransportError::Timeout(timeout))),
            None => call.await,
        };
        let response = result.inspect_err(|e| {
            warn!(%producer, registry = %self.options.registry, error = %e, "registry call failed")
        })?;

        let authorized = decode_check_output(&response).inspect_err(|e| {
            warn!(%producer, %response, error = %e, "malformed registry response")
        })?;
        debug!(%producer, authorized, "registry answered");

        Ok(Authorization { authorized, response })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{DecodeError, registry};

    #[derive(Clone, Debug, Default)]
    struct RecordingTransport {
        output: Vec<u8>,
        requests: Arc<Mutex<Vec<CallRequest>>>,
    }

    impl RegistryTransport for RecordingTransport {
        async fn call(&self, request: CallRequest) -> Result<Bytes, TransportError> {
            self.requests.lock().unwrap().push(request);
            Ok(Bytes::from(self.output.clone()))
        }
    }

    #[derive(Clone, Debug)]
    struct StalledTransport;

    impl RegistryTransport for StalledTransport {
        async fn call(&self, _request: CallRequest) -> Result<Bytes, TransportError> {
            std::future::pending().await
        }
    }

    fn bool_word(value: bool) -> Vec<u8> {
        let mut word = vec![0u8; 32];
        word[31] = u8::from(value);
        word
    }

    fn options() -> AuthorityOptions {
        AuthorityOptions::new(Address::repeat_byte(0xaa), Address::repeat_byte(0xbb))
    }

    #[tokio::test]
    async fn builds_check_call_from_options() {
        let transport = RecordingTransport { output: bool_word(true), ..Default::default() };
        let oracle = AuthorizationOracle::new(transport.clone(), options());
        let producer = Address::repeat_byte(0x42);

        let answer = oracle.is_authorized(producer, CallOptions::unbounded()).await.unwrap();
        assert!(answer.authorized);
        assert_eq!(answer.response.as_ref(), bool_word(true).as_slice());

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].from, Some(Address::repeat_byte(0xbb)));
        assert_eq!(requests[0].to, Some(Address::repeat_byte(0xaa)));
        assert_eq!(requests[0].data, Some(registry::encode_check_call(producer)));
    }

    #[tokio::test]
    async fn false_is_an_answer_not_an_error() {
        let transport = RecordingTransport { output: bool_word(false), ..Default::default() };
        let oracle = AuthorizationOracle::new(transport, options());

        let answer = oracle.is_authorized(Address::ZERO, CallOptions::default()).await.unwrap();
        assert!(!answer.authorized);
    }

    #[tokio::test]
    async fn every_query_reaches_the_registry() {
        let transport = RecordingTransport { output: bool_word(true), ..Default::default() };
        let oracle = AuthorizationOracle::new(transport.clone(), options());

        for _ in 0..3 {
            oracle.is_authorized(Address::ZERO, CallOptions::default()).await.unwrap();
        }
        assert_eq!(transport.requests.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn malformed_output_is_a_decode_error() {
        let transport = RecordingTransport { output: vec![1, 2, 3], ..Default::default() };
        let oracle = AuthorizationOracle::new(transport, options());

        let err = oracle.is_authorized(Address::ZERO, CallOptions::default()).await.unwrap_err();
        assert!(matches!(err, AuthorityError::Decode(DecodeError::Length { actual: 3, .. })));
    }

    #[tokio::test]
    async fn deadline_surfaces_as_unavailable() {
        let oracle = AuthorizationOracle::new(StalledTransport, options());
        let timeout = Duration::from_millis(20);

        let err = oracle
            .is_authorized(Address::ZERO, CallOptions::with_timeout(timeout))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AuthorityError::Unavailable(TransportError::Timeout(t)) if t == timeout
        ));
    }
}
