//! Open/send request channel
//!
//! The second wrapped surface: callers `open` a method and URL first and
//! `send` a body later. The open step alone cannot set the fingerprint
//! headers, so header assignment is deferred to `send`, where the channel's
//! collected headers and the decorator's injection both happen before the
//! underlying dispatch runs.

use std::sync::Arc;

use crate::{Error, Result};
use super::headers::{HeaderCarrier, HeaderSink};
use super::traits::{Dispatch, OutboundRequest, TransportResponse};

/// Stateful open/send request surface
pub struct RequestChannel {
    dispatch: Arc<dyn Dispatch>,
    pending: Option<(String, String)>,
    headers: HeaderCarrier,
}

impl RequestChannel {
    /// Create a channel over a dispatch; obtained from [`super::Installed::channel`]
    pub(crate) fn new(dispatch: Arc<dyn Dispatch>) -> Self {
        Self {
            dispatch,
            pending: None,
            headers: HeaderCarrier::map(),
        }
    }

    /// Record the method and URL of the upcoming request
    pub fn open<M: Into<String>, U: Into<String>>(&mut self, method: M, url: U) {
        self.pending = Some((method.into(), url.into()));
        self.headers = HeaderCarrier::map();
    }

    /// Set a caller header on the opened request
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.set(name, value);
    }

    /// Dispatch the opened request.
    ///
    /// Consumes the open state; a second `send` requires a fresh `open`.
    pub async fn send(&mut self, body: Option<Vec<u8>>) -> Result<TransportResponse> {
        let (method, url) = self
            .pending
            .take()
            .ok_or_else(|| Error::channel_state("send called before open"))?;

        let headers = std::mem::replace(&mut self.headers, HeaderCarrier::map());

        let mut request = OutboundRequest::new(method, url).with_headers(headers);
        request.body = body;

        self.dispatch.dispatch(request).await
    }
}
