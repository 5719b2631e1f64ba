//! Chat service orchestrating message persistence and AI replies.
//!
//! `ChatService` is the message router: three independent, stateless
//! operations (list, send, clear) over an optional message store and an
//! optional reply provider. Both collaborators are injected at startup;
//! when either is absent the corresponding feature degrades instead of
//! failing. The only error that propagates out of this type is input
//! validation on `send`.

use banter_types::error::{ChatError, ReplyError};
use banter_types::message::{ClearOutcome, Message, SendOutcome};
use tracing::{error, info, warn};

use crate::chat::context::RequestContext;
use crate::reply::fallback;
use crate::reply::provider::ReplyProvider;
use crate::repository::message::MessageRepository;

/// Maximum accepted message length, in characters.
pub const MAX_TEXT_LEN: usize = 4000;

/// How many rows the list operation fetches.
pub const LIST_LIMIT: u32 = 50;

/// Routes chat operations between the message store and the reply provider.
///
/// Generic over [`MessageRepository`] and [`ReplyProvider`] so banter-core
/// never depends on banter-infra, and so tests can substitute both.
pub struct ChatService<R: MessageRepository, P: ReplyProvider> {
    store: Option<R>,
    replier: Option<P>,
}

impl<R: MessageRepository, P: ReplyProvider> ChatService<R, P> {
    /// Create a new chat service over the injected collaborators.
    ///
    /// `None` for the store means nothing persists; `None` for the replier
    /// means every send answers with the not-configured text.
    pub fn new(store: Option<R>, replier: Option<P>) -> Self {
        Self { store, replier }
    }

    /// Fetch up to the 50 most recent messages, newest first.
    ///
    /// Returns an empty list when no store is configured or on any query
    /// error; read failures are logged, never raised.
    pub async fn list(&self) -> Vec<Message> {
        let Some(store) = &self.store else {
            return Vec::new();
        };

        match store.list_recent(LIST_LIMIT).await {
            Ok(messages) => messages,
            Err(err) => {
                error!(%err, "message list query failed");
                Vec::new()
            }
        }
    }

    /// Validate, persist, and answer one user message.
    ///
    /// Two independent best-effort writes bracket one external call, all
    /// sequential, no transaction: a stored user message with a missing AI
    /// row is acceptable partial completion. The reply is never empty.
    pub async fn send(
        &self,
        ctx: &RequestContext,
        text: &str,
    ) -> Result<SendOutcome, ChatError> {
        let len = text.chars().count();
        if len == 0 || len > MAX_TEXT_LEN {
            return Err(ChatError::InvalidText {
                len,
                max: MAX_TEXT_LEN,
            });
        }

        self.store_best_effort(Message::now(text, ctx.user_id.clone()), "user")
            .await;

        let reply = self.generate_reply(text).await;

        self.store_best_effort(Message::now(reply.clone(), ctx.user_id.clone()), "ai")
            .await;

        Ok(SendOutcome {
            success: true,
            reply,
        })
    }

    /// Delete every message.
    ///
    /// Trivially succeeds when no store is configured; a failed delete is
    /// reported in the outcome rather than raised.
    pub async fn clear(&self) -> ClearOutcome {
        let Some(store) = &self.store else {
            return ClearOutcome::ok();
        };

        match store.clear_all().await {
            Ok(deleted) => {
                info!(deleted, "chat cleared");
                ClearOutcome::ok()
            }
            Err(err) => {
                error!(%err, "clear chat failed");
                ClearOutcome::failed("Failed to clear chat")
            }
        }
    }

    async fn store_best_effort(&self, message: Message, role: &'static str) {
        let Some(store) = &self.store else {
            return;
        };

        if let Err(err) = store.insert(&message).await {
            error!(%err, role, "failed to store message");
        }
    }

    /// Resolve the reply text. Total: every provider failure is logged and
    /// replaced by its fixed fallback string, and a residual empty reply is
    /// substituted with the last-resort text.
    async fn generate_reply(&self, prompt: &str) -> String {
        let outcome = match &self.replier {
            Some(replier) => replier.generate(prompt).await,
            None => Err(ReplyError::NotConfigured),
        };

        let reply = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                warn!(%err, "reply generation failed, substituting fallback text");
                fallback::reply_for(&err).to_string()
            }
        };

        if reply.trim().is_empty() {
            fallback::FINAL_FALLBACK.to_string()
        } else {
            reply
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
