//! Generative-language provider implementations.
//!
//! Contains concrete implementations of the [`ReplyProvider`] trait defined
//! in `banter-core`, currently Google Gemini only.
//!
//! [`ReplyProvider`]: banter_core::reply::provider::ReplyProvider

pub mod gemini;
