//! # Fingerprint engine
//!
//! Derives a stable per-client identifier from passively observable host
//! characteristics and caches it in durable local storage.
//!
//! ## Main pieces
//! - **Signal collection**: a fixed, ordered set of host signals, each read
//!   best-effort with a documented sentinel substituted when unavailable
//! - **Hashing**: deterministic reduction of the joined signal string to a
//!   32-character lowercase hex identifier
//! - **Persistence**: the identifier is written once to a JSON state file and
//!   reused on every later run; storage failures degrade to a session-only ID
//! - **Display form**: cosmetic MAC-address-styled rendering of the ID prefix
//!
//! ## Module structure
//! - `traits`: seams for signal collection and identity storage
//! - `signals`: signal set definition and the host signal reader
//! - `hash`: the fingerprint hash function
//! - `store`: file-backed and in-memory identity stores
//! - `engine`: the engine tying collection, hashing and storage together

pub mod traits;
pub mod signals;
pub mod hash;
pub mod store;
pub mod engine;

#[cfg(test)]
mod tests;

pub use traits::{IdentityStore, SignalReader};
pub use signals::{HostSignalReader, SignalSet, CANVAS_SENTINEL, SCREEN_SENTINEL, SIGNAL_SEPARATOR, WEBGL_SENTINEL};
pub use hash::{hash, EMPTY_FINGERPRINT, FINGERPRINT_LEN};
pub use store::{FileStore, MemoryStore, STORAGE_KEY};
pub use engine::{format_as_mac, FingerprintEngine, MAC_FALLBACK};
