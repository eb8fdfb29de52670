//! Fingermark agent entry point
//!
//! Smoke client exercising the full path: derive (or load) the device
//! fingerprint, install the interception layer over a real HTTP transport, and
//! issue one tagged request against the configured endpoint.
//!
//! ## Environment variables
//! - `FINGERMARK_STATE_PATH`: JSON state file holding the persisted ID
//! - `FINGERMARK_ENDPOINT`: endpoint the smoke request is sent to
//! - `FINGERMARK_OVERWRITE_HEADERS`: whether injected headers replace caller-set ones
//! - `RUST_LOG`: log level

use fingermark::{
    config::Config,
    engine::{FileStore, FingerprintEngine, HostSignalReader},
    intercept::{HeaderPolicy, HttpDispatch, Installer, OutboundRequest},
};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    info!("Fingermark Agent v{}", fingermark::VERSION);

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: state_path={}, endpoint={}",
        config.state_path, config.endpoint
    );

    // Build the fingerprint engine over the host reader and file store
    let reader = Arc::new(HostSignalReader::from_config(&config));
    let store = Arc::new(FileStore::new(&config.state_path));
    let engine = Arc::new(FingerprintEngine::new(reader, store));

    // Install the interception layer over the HTTP transport
    let policy = if config.overwrite_headers {
        HeaderPolicy::Overwrite
    } else {
        HeaderPolicy::PreserveExisting
    };

    let installer = Installer::new(Some(engine), policy);
    let transport = Arc::new(HttpDispatch::new(config.user_agent.clone())?);
    let installed = installer.install(transport).await?;

    info!("Device ID: {}", installed.device_id());
    info!("Client MAC: {}", installed.client_mac());

    // One tagged request end to end
    match installed.fetch(OutboundRequest::get(&config.endpoint)).await {
        Ok(response) => info!("Endpoint {} answered {}", config.endpoint, response.status),
        Err(e) => warn!("Smoke request failed: {}", e),
    }

    Ok(())
}
