//! Fixed user-facing fallback text for reply failures.
//!
//! The send path is total: the user always receives a non-empty reply. This
//! module owns the mapping from each [`ReplyError`] variant to the apology
//! string shown in its place.

use banter_types::error::ReplyError;

/// Shown when no API key is configured. Returned without a network call.
pub const NOT_CONFIGURED: &str =
    "I'm sorry, but I'm not properly configured to respond right now. \
     Please check the API key configuration.";

/// Shown when the upstream rejects the prompt (HTTP 400).
pub const REPHRASE: &str =
    "I couldn't process your request. Please try rephrasing your message.";

/// Shown when the upstream refuses the API key (HTTP 403).
pub const UNAUTHORIZED: &str =
    "I'm not authorized to respond right now. Please check the API key permissions.";

/// Shown for any other non-2xx upstream status.
pub const TECHNICAL_DIFFICULTIES: &str =
    "I'm experiencing technical difficulties. Please try again in a moment.";

/// Shown for transport and decode failures.
pub const TROUBLE_CONNECTING: &str =
    "I'm having trouble connecting to my AI service. \
     Please check your internet connection and try again.";

/// Shown when the upstream succeeded but produced no usable text.
pub const EMPTY_COMPLETION: &str =
    "I received your message but couldn't generate a proper response. Please try again.";

/// Last-resort substitute for any residual empty reply.
pub const FINAL_FALLBACK: &str =
    "Thanks! I received your message, but I'm having trouble generating a response right now.";

/// The fallback string shown in place of a failed reply.
pub fn reply_for(err: &ReplyError) -> &'static str {
    match err {
        ReplyError::NotConfigured => NOT_CONFIGURED,
        ReplyError::BadRequest => REPHRASE,
        ReplyError::Unauthorized => UNAUTHORIZED,
        ReplyError::Upstream { .. } => TECHNICAL_DIFFICULTIES,
        ReplyError::Timeout | ReplyError::Network(_) | ReplyError::Deserialization(_) => {
            TROUBLE_CONNECTING
        }
        ReplyError::EmptyCompletion => EMPTY_COMPLETION,
    }
}
