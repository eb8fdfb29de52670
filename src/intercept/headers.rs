//! Header carrier capabilities
//!
//! Outbound requests carry their headers in one of two shapes: a typed,
//! appendable header collection or a plain string map. The tagging decorator
//! only relies on the small [`HeaderSink`] capability both variants share.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Display-form header name
pub const HEADER_CLIENT_MAC: &str = "X-Client-MAC";

/// Raw fingerprint ID header name
pub const HEADER_DEVICE_ID: &str = "X-Device-ID";

/// Minimal header capability shared by both carrier variants
pub trait HeaderSink {
    /// Set a header, replacing any existing value under the same name
    fn set(&mut self, name: &str, value: &str);

    /// Whether a header of this name is present (case-insensitive)
    fn contains(&self, name: &str) -> bool;

    /// Read a header value (case-insensitive)
    fn get(&self, name: &str) -> Option<String>;
}

/// Typed, appendable header collection over a reqwest [`HeaderMap`]
#[derive(Debug, Clone, Default)]
pub struct AppendableHeaders(pub HeaderMap);

impl AppendableHeaders {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header without replacing existing values of the same name.
    ///
    /// Invalid names or values are dropped silently; header injection is a
    /// best-effort overlay and must never fail a call.
    pub fn append(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.0.append(name, value);
        }
    }
}

impl HeaderSink for AppendableHeaders {
    fn set(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.0.insert(name, value);
        }
    }

    fn contains(&self, name: &str) -> bool {
        HeaderName::from_bytes(name.as_bytes())
            .map(|n| self.0.contains_key(&n))
            .unwrap_or(false)
    }

    fn get(&self, name: &str) -> Option<String> {
        let name = HeaderName::from_bytes(name.as_bytes()).ok()?;
        self.0
            .get(&name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

/// Plain key/value header mapping
#[derive(Debug, Clone, Default)]
pub struct MapHeaders(pub HashMap<String, String>);

impl MapHeaders {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeaderSink for MapHeaders {
    fn set(&mut self, name: &str, value: &str) {
        // header names are case-insensitive; drop any existing spelling first
        self.0.retain(|k, _| !k.eq_ignore_ascii_case(name));
        self.0.insert(name.to_string(), value.to_string());
    }

    fn contains(&self, name: &str) -> bool {
        self.0.keys().any(|k| k.eq_ignore_ascii_case(name))
    }

    fn get(&self, name: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
    }
}

/// Header carrier attached to an outbound request
///
/// The capability check happens once per call at the decorator: the matching
/// variant's method is used, and a request carrying neither (no carrier at
/// all) proceeds unmodified.
#[derive(Debug, Clone)]
pub enum HeaderCarrier {
    /// Appendable header-collection capability
    Appendable(AppendableHeaders),
    /// Plain key/mapping capability
    Map(MapHeaders),
}

impl HeaderCarrier {
    /// Create an empty appendable carrier
    pub fn appendable() -> Self {
        HeaderCarrier::Appendable(AppendableHeaders::new())
    }

    /// Create an empty map carrier
    pub fn map() -> Self {
        HeaderCarrier::Map(MapHeaders::new())
    }
}

impl HeaderSink for HeaderCarrier {
    fn set(&mut self, name: &str, value: &str) {
        match self {
            HeaderCarrier::Appendable(headers) => headers.set(name, value),
            HeaderCarrier::Map(headers) => headers.set(name, value),
        }
    }

    fn contains(&self, name: &str) -> bool {
        match self {
            HeaderCarrier::Appendable(headers) => headers.contains(name),
            HeaderCarrier::Map(headers) => headers.contains(name),
        }
    }

    fn get(&self, name: &str) -> Option<String> {
        match self {
            HeaderCarrier::Appendable(headers) => headers.get(name),
            HeaderCarrier::Map(headers) => headers.get(name),
        }
    }
}
