//! Interception layer traits and shared types
//!
//! The dispatch seam is the single point every outbound request passes
//! through; the tagging decorator wraps it without changing its shape.

use async_trait::async_trait;

use crate::Result;
use super::headers::HeaderCarrier;

/// One outbound request as seen at the dispatch seam
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    /// HTTP method name
    pub method: String,
    /// Absolute request URL
    pub url: String,
    /// Header carrier; a request without one proceeds unmodified
    pub headers: Option<HeaderCarrier>,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl OutboundRequest {
    /// Create a request with an empty map-style header carrier
    pub fn new<M: Into<String>, U: Into<String>>(method: M, url: U) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Some(HeaderCarrier::map()),
            body: None,
        }
    }

    /// Create a GET request
    pub fn get<U: Into<String>>(url: U) -> Self {
        Self::new("GET", url)
    }

    /// Replace the header carrier
    pub fn with_headers(mut self, headers: HeaderCarrier) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Drop the header carrier entirely
    pub fn without_headers(mut self) -> Self {
        self.headers = None;
        self
    }

    /// Attach a request body
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response as observed at the transport boundary
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes
    pub body: Vec<u8>,
}

/// Dispatch trait
///
/// The future-based request surface. Implementations must not retain requests
/// across calls; the decorator relies on per-call delegation.
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Send one request and return the transport's response
    async fn dispatch(&self, request: OutboundRequest) -> Result<TransportResponse>;
}

/// Identity exposed by the interception layer after install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Raw 32-hex-char fingerprint ID
    pub device_id: String,
    /// MAC-address-styled display form
    pub client_mac: String,
}

/// Whether injected headers replace caller-set headers of the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Injected values replace whatever the caller set (reference behavior)
    Overwrite,
    /// Caller-set headers of the same name are kept untouched
    PreserveExisting,
}

impl Default for HeaderPolicy {
    fn default() -> Self {
        HeaderPolicy::Overwrite
    }
}
