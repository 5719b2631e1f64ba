//! Chat message domain types for Banter.
//!
//! A `Message` is the only persisted entity: one row per user or AI message,
//! immutable once created and ordered solely by `created_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Kind of a chat message.
///
/// Only one kind exists today. Maps to the CHECK constraint in the SQLite
/// schema: `CHECK (type IN ('text'))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Text => write!(f, "text"),
        }
    }
}

impl FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(MessageKind::Text),
            other => Err(format!("invalid message kind: '{other}'")),
        }
    }
}

impl Default for MessageKind {
    fn default() -> Self {
        MessageKind::Text
    }
}

/// A single chat message.
///
/// Created either by the router (user message, echoing client input) or by
/// the reply path (AI message, after a successful or fallback-generated
/// reply). Never mutated or soft-deleted; `clear` is a hard bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// UUIDv7 message ID, assigned at creation.
    pub id: Uuid,
    /// Message body. Non-empty and at most 4000 characters at the boundary;
    /// the router enforces this, not the store.
    pub text: String,
    /// Fixed `text` kind.
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    /// Creation timestamp, assigned by the producer. The sole ordering key.
    pub created_at: DateTime<Utc>,
    /// Sending user, once authentication is wired in. Currently always absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Message {
    /// Build a message stamped with a fresh UUIDv7 id and the current time.
    pub fn now(text: impl Into<String>, user_id: Option<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            kind: MessageKind::Text,
            created_at: Utc::now(),
            user_id,
        }
    }
}

/// Result of the `chat.sendMessage` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOutcome {
    pub success: bool,
    /// The AI reply. Never empty: upstream failures are substituted with
    /// fixed fallback text before reaching this type.
    pub reply: String,
}

/// Result of the `chat.clearChat` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClearOutcome {
    /// A successful clear.
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// A failed clear with an operator-facing reason.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
