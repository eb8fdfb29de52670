//! Fingermark: device fingerprint derivation and transparent request tagging
//!
//! This library derives a stable per-client identifier from passively observable
//! host characteristics, caches it in a local state file, and decorates every
//! outbound request made through its transport layer with `X-Client-MAC` and
//! `X-Device-ID` headers.

pub mod error;
pub mod config;

pub mod engine;
pub mod intercept;

// Re-exports
pub use error::{Error, Result};

/// Fingermark library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
