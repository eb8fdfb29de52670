//! Dispatch implementations
//!
//! [`TaggedDispatch`] is the tagging decorator: it takes the real dispatch and
//! returns a wrapped one, composed once at the networking entry point instead
//! of mutating any shared state. [`HttpDispatch`] is the production transport
//! over reqwest.

use async_trait::async_trait;
use std::sync::Arc;

use crate::{Error, Result};
use super::headers::{HeaderCarrier, HeaderSink, HEADER_CLIENT_MAC, HEADER_DEVICE_ID};
use super::traits::{Dispatch, HeaderPolicy, Identity, OutboundRequest, TransportResponse};

/// Dispatch decorator injecting the fingerprint headers
///
/// Decoration is synchronous; the inner dispatch's result, errors and timing
/// pass through untouched.
pub struct TaggedDispatch {
    inner: Arc<dyn Dispatch>,
    identity: Identity,
    policy: HeaderPolicy,
}

impl TaggedDispatch {
    /// Wrap a dispatch with header tagging
    pub fn new(inner: Arc<dyn Dispatch>, identity: Identity, policy: HeaderPolicy) -> Self {
        Self {
            inner,
            identity,
            policy,
        }
    }

    /// The identity this decorator injects
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    fn decorate(&self, request: &mut OutboundRequest) {
        let Some(carrier) = request.headers.as_mut() else {
            tracing::debug!("request to {} has no header carrier, passing through untagged", request.url);
            return;
        };

        match self.policy {
            HeaderPolicy::Overwrite => {
                carrier.set(HEADER_CLIENT_MAC, &self.identity.client_mac);
                carrier.set(HEADER_DEVICE_ID, &self.identity.device_id);
            }
            HeaderPolicy::PreserveExisting => {
                if !carrier.contains(HEADER_CLIENT_MAC) {
                    carrier.set(HEADER_CLIENT_MAC, &self.identity.client_mac);
                }
                if !carrier.contains(HEADER_DEVICE_ID) {
                    carrier.set(HEADER_DEVICE_ID, &self.identity.device_id);
                }
            }
        }
    }
}

#[async_trait]
impl Dispatch for TaggedDispatch {
    async fn dispatch(&self, mut request: OutboundRequest) -> Result<TransportResponse> {
        self.decorate(&mut request);
        self.inner.dispatch(request).await
    }
}

/// Production transport over a reqwest client
pub struct HttpDispatch {
    client: reqwest::Client,
}

impl HttpDispatch {
    /// Build the transport, optionally advertising a user agent on the wire
    pub fn new(user_agent: Option<String>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }

        let client = builder
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Dispatch for HttpDispatch {
    async fn dispatch(&self, request: OutboundRequest) -> Result<TransportResponse> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| Error::transport(format!("invalid method {}: {}", request.method, e)))?;

        let mut builder = self.client.request(method, &request.url);

        match request.headers {
            Some(HeaderCarrier::Appendable(headers)) => {
                builder = builder.headers(headers.0);
            }
            Some(HeaderCarrier::Map(headers)) => {
                for (name, value) in headers.0 {
                    builder = builder.header(name, value);
                }
            }
            None => {}
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
