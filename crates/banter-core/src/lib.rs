//! Business logic and repository trait definitions for Banter.
//!
//! This crate defines the "ports" (storage and reply-provider traits) that
//! the infrastructure layer implements, plus the chat service that routes
//! between them. It depends only on `banter-types` -- never on
//! `banter-infra` or any database/HTTP crate.

pub mod chat;
pub mod reply;
pub mod repository;
