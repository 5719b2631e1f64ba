//! Shared domain types for Banter.
//!
//! This crate contains the chat domain types used across the Banter service:
//! Message, the router outcome types, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod message;
