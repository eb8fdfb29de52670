//! Mock transport for testing
//!
//! Records every request as observed at the transport boundary, so tests can
//! assert on the headers a receiving service would actually see.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{Error, Result};
use super::traits::{Dispatch, OutboundRequest, TransportResponse};

/// Recording transport returning canned responses
pub struct MockTransport {
    requests: Arc<Mutex<Vec<OutboundRequest>>>,
    status: u16,
    failing: AtomicBool,
}

impl MockTransport {
    /// Create a mock answering every request with 200
    pub fn new() -> Self {
        Self::with_status(200)
    }

    /// Create a mock answering every request with the given status
    pub fn with_status(status: u16) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            status,
            failing: AtomicBool::new(false),
        }
    }

    /// Make subsequent dispatches fail at the transport level
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }

    /// Snapshot of all requests observed so far
    pub async fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dispatch for MockTransport {
    async fn dispatch(&self, request: OutboundRequest) -> Result<TransportResponse> {
        if self.failing.load(Ordering::Relaxed) {
            return Err(Error::transport("mock transport failure"));
        }

        self.requests.lock().await.push(request);

        Ok(TransportResponse {
            status: self.status,
            body: b"ok".to_vec(),
        })
    }
}
