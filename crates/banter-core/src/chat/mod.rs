//! Chat routing layer.
//!
//! `ChatService` exposes the three router operations (list, send, clear)
//! over the injected message store and reply provider. `RequestContext`
//! carries per-request data into the service.

pub mod context;
pub mod service;

pub use context::RequestContext;
pub use service::ChatService;
