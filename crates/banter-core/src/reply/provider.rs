//! ReplyProvider trait definition.
//!
//! The abstraction over the generative-language backend. Implementations
//! live in banter-infra (e.g., `GeminiClient`).

use banter_types::error::ReplyError;

/// Trait for generative reply backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ReplyProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Generate a reply for the given prompt.
    ///
    /// The prompt is already bounded to the router's length limit by the
    /// caller. Every failure mode is a typed [`ReplyError`]; the chat
    /// service converts errors to fixed user-facing fallback text, so
    /// nothing downstream of validation ever surfaces an error to the user.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, ReplyError>> + Send;
}
