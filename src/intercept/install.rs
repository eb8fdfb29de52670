//! Interceptor installation
//!
//! Wiring happens exactly once per process: the installer checks that the
//! fingerprint engine is available, resolves the identity, and wraps the
//! transport. A missing engine aborts installation cleanly; the raw transport
//! stays fully usable, just unmarked.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::engine::{format_as_mac, FingerprintEngine};
use crate::{Error, Result};
use super::channel::RequestChannel;
use super::dispatch::TaggedDispatch;
use super::traits::{Dispatch, HeaderPolicy, Identity, OutboundRequest, TransportResponse};

/// Install-once wiring for the interception layer
pub struct Installer {
    engine: Option<Arc<FingerprintEngine>>,
    policy: HeaderPolicy,
    installed: AtomicBool,
}

impl Installer {
    /// Create an installer; the engine must be registered here before install
    pub fn new(engine: Option<Arc<FingerprintEngine>>, policy: HeaderPolicy) -> Self {
        Self {
            engine,
            policy,
            installed: AtomicBool::new(false),
        }
    }

    /// Wrap the transport and expose the resolved identity.
    ///
    /// Fails with [`Error::EngineUnavailable`] when no engine was registered
    /// and with [`Error::AlreadyInstalled`] on a second call; re-wrapping an
    /// already-wrapped surface would double-inject headers.
    pub async fn install(&self, transport: Arc<dyn Dispatch>) -> Result<Installed> {
        let Some(engine) = self.engine.as_ref() else {
            tracing::error!("fingerprint engine must be loaded before the interceptor installs");
            return Err(Error::engine_unavailable("no engine registered with installer"));
        };

        if self.installed.swap(true, Ordering::SeqCst) {
            return Err(Error::already_installed("request surfaces are already wrapped"));
        }

        let device_id = engine.get_or_create().await;
        let client_mac = format_as_mac(&device_id);

        tracing::info!(
            device_id = %device_id,
            client_mac = %client_mac,
            "request tagging enabled, all outbound calls will carry the fingerprint headers"
        );

        let identity = Identity {
            device_id,
            client_mac,
        };

        let dispatch = Arc::new(TaggedDispatch::new(transport, identity.clone(), self.policy));

        Ok(Installed { identity, dispatch })
    }
}

/// Handle to the installed interception layer
///
/// Exposes the two wrapped request surfaces and the read-only identity values
/// for other code in the process to consult. There is no teardown path.
pub struct Installed {
    identity: Identity,
    dispatch: Arc<TaggedDispatch>,
}

impl Installed {
    /// The wrapped future-based dispatch surface
    pub fn dispatch(&self) -> Arc<dyn Dispatch> {
        self.dispatch.clone()
    }

    /// Send one request through the wrapped dispatch surface
    pub async fn fetch(&self, request: OutboundRequest) -> Result<TransportResponse> {
        self.dispatch.dispatch(request).await
    }

    /// Create an open/send channel over the wrapped dispatch
    pub fn channel(&self) -> RequestChannel {
        RequestChannel::new(self.dispatch.clone())
    }

    /// Raw 32-hex-char fingerprint ID
    pub fn device_id(&self) -> &str {
        &self.identity.device_id
    }

    /// MAC-address-styled display form
    pub fn client_mac(&self) -> &str {
        &self.identity.client_mac
    }
}
