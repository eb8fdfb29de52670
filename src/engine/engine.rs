//! Fingerprint engine implementation
//!
//! Ties signal collection, hashing and identity persistence together.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::hash::hash;
use super::traits::{IdentityStore, SignalReader};

/// Fallback display form for a missing or malformed fingerprint ID
pub const MAC_FALLBACK: &str = "00:00:00:00:00:00";

/// Fingerprint engine
///
/// Generation never fails: every signal read is best-effort inside the reader,
/// and storage being unusable only degrades the ID to session-only scope.
pub struct FingerprintEngine {
    reader: Arc<dyn SignalReader>,
    store: Arc<dyn IdentityStore>,
    /// Per-process cache; the store is read once and written at most once
    cached: RwLock<Option<String>>,
}

impl FingerprintEngine {
    /// Create a new engine over a signal reader and identity store
    pub fn new(reader: Arc<dyn SignalReader>, store: Arc<dyn IdentityStore>) -> Self {
        Self {
            reader,
            store,
            cached: RwLock::new(None),
        }
    }

    /// Generate a fresh fingerprint ID from the current signal set
    pub fn generate(&self) -> String {
        let signals = self.reader.read();
        hash(&signals.join())
    }

    /// Return the cached fingerprint ID, generating and persisting it on first use.
    ///
    /// A persisted non-empty record wins unchanged; no re-validation, no
    /// re-generation. Storage failures in either direction are warn-level only
    /// and the freshly generated ID is still returned.
    pub async fn get_or_create(&self) -> String {
        if let Some(id) = self.cached.read().await.as_deref() {
            return id.to_string();
        }

        match self.store.load() {
            Ok(Some(id)) if !id.is_empty() => {
                *self.cached.write().await = Some(id.clone());
                return id;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("fingerprint storage read failed: {}", e);
            }
        }

        let id = self.generate();

        if let Err(e) = self.store.save(&id) {
            tracing::warn!("fingerprint storage write failed, ID is session-only: {}", e);
        }

        *self.cached.write().await = Some(id.clone());
        id
    }
}

/// Format a fingerprint ID as a MAC-address-styled display string.
///
/// Takes the first 12 hex characters, re-split into six upper-cased 2-character
/// groups joined by `:`. Purely cosmetic; never a real hardware address. A
/// missing or too-short ID yields [`MAC_FALLBACK`].
pub fn format_as_mac(id: &str) -> String {
    let prefix: Vec<char> = id.chars().take(12).collect();
    if prefix.len() < 12 {
        return MAC_FALLBACK.to_string();
    }

    prefix
        .chunks(2)
        .map(|pair| pair.iter().collect::<String>().to_uppercase())
        .collect::<Vec<_>>()
        .join(":")
}
