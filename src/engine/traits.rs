//! Fingerprint engine traits
//!
//! Seams for signal collection and identity persistence. The engine only
//! depends on these, so tests can substitute fixed readers and failing stores.

use crate::Result;
use super::signals::SignalSet;

/// Signal reader trait
///
/// Produces the ordered signal set the fingerprint is derived from. Reads are
/// best-effort: an implementation substitutes the documented sentinel for any
/// signal it cannot observe and never fails as a whole.
pub trait SignalReader: Send + Sync {
    /// Read the full signal set once
    fn read(&self) -> SignalSet;
}

/// Identity store trait
///
/// Durable key-value storage for the persisted fingerprint ID. The engine
/// reads once and writes at most once per process; both operations failing is
/// a recoverable condition.
pub trait IdentityStore: Send + Sync {
    /// Load the persisted fingerprint ID, if one exists
    fn load(&self) -> Result<Option<String>>;

    /// Persist the fingerprint ID
    fn save(&self, id: &str) -> Result<()>;
}
