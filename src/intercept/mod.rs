//! # Interception layer
//!
//! Decorates every outbound request made through the crate's transport seam
//! with the fingerprint headers `X-Client-MAC` and `X-Device-ID`, without
//! callers opting in.
//!
//! ## Contract
//! - Two request surfaces are wrapped: the future-based dispatch call and the
//!   open/send request channel
//! - Wrapping is transparent: arguments, results, errors and timing of the
//!   underlying transport pass through unchanged except for the added headers
//! - Header injection is a best-effort overlay; no failure in this layer ever
//!   blocks an outbound call
//!
//! ## Module structure
//! - `traits`: the dispatch seam and shared request/response/identity types
//! - `headers`: the two header-carrier capabilities
//! - `dispatch`: the tagging decorator and the reqwest-backed transport
//! - `channel`: the open/send surface with deferred header assignment
//! - `install`: install-once wiring and the exposed identity values
//! - `mock`: recording transport for tests

pub mod traits;
pub mod headers;
pub mod dispatch;
pub mod channel;
pub mod install;
pub mod mock;


pub use traits::{Dispatch, HeaderPolicy, Identity, OutboundRequest, TransportResponse};
pub use headers::{AppendableHeaders, HeaderCarrier, HeaderSink, MapHeaders, HEADER_CLIENT_MAC, HEADER_DEVICE_ID};
pub use dispatch::{HttpDispatch, TaggedDispatch};
pub use channel::RequestChannel;
pub use install::{Installed, Installer};
pub use mock::MockTransport;
