//! Application layer for Banter: HTTP surface, CLI, and state wiring.
//!
//! Exposed as a library so integration tests can drive the router directly;
//! the `banter` binary in `main.rs` is a thin shell over these modules.

pub mod cli;
pub mod http;
pub mod state;
