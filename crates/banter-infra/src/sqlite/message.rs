//! SQLite message repository implementation.
//!
//! Implements `MessageRepository` from `banter-core` using sqlx with split
//! read/write pools. One table, three statements: insert, ordered select,
//! unconditional delete.

use banter_core::repository::message::MessageRepository;
use banter_types::error::RepositoryError;
use banter_types::message::{Message, MessageKind};
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Internal row type
// ---------------------------------------------------------------------------

struct MessageRow {
    id: String,
    text: String,
    kind: String,
    created_at: String,
    user_id: Option<String>,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            text: row.try_get("text")?,
            kind: row.try_get("type")?,
            created_at: row.try_get("created_at")?,
            user_id: row.try_get("user_id")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        let kind: MessageKind = self
            .kind
            .parse()
            .map_err(RepositoryError::Query)?;

        Ok(Message {
            id: parse_uuid(&self.id)?,
            text: self.text,
            kind,
            created_at: parse_datetime(&self.created_at)?,
            user_id: self.user_id,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_uuid(s: &str) -> Result<Uuid, RepositoryError> {
    s.parse::<Uuid>()
        .map_err(|e| RepositoryError::Query(format!("invalid UUID: {e}")))
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// MessageRepository impl
// ---------------------------------------------------------------------------

impl MessageRepository for SqliteMessageRepository {
    async fn insert(&self, message: &Message) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO messages (id, text, type, created_at, user_id)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.to_string())
        .bind(&message.text)
        .bind(message.kind.to_string())
        .bind(format_datetime(&message.created_at))
        .bind(&message.user_id)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Message>, RepositoryError> {
        // rowid breaks created_at ties in insertion order
        let rows = sqlx::query(
            r#"SELECT id, text, type, created_at, user_id FROM messages
               ORDER BY created_at DESC, rowid DESC
               LIMIT ?"#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| {
                MessageRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_message()
            })
            .collect()
    }

    async fn clear_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM messages")
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    async fn test_repo(dir: &tempfile::TempDir) -> SqliteMessageRepository {
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        let pool = DatabasePool::new(&url).await.unwrap();
        SqliteMessageRepository::new(pool)
    }

    fn message_at(text: &str, created_at: DateTime<Utc>) -> Message {
        Message {
            id: Uuid::now_v7(),
            text: text.to_string(),
            kind: MessageKind::Text,
            created_at,
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_then_list_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = test_repo(&dir).await;

        let msg = Message::now("hello there", Some("auth0|u1".to_string()));
        repo.insert(&msg).await.unwrap();

        let listed = repo.list_recent(50).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, msg.id);
        assert_eq!(listed[0].text, "hello there");
        assert_eq!(listed[0].kind, MessageKind::Text);
        assert_eq!(listed[0].user_id.as_deref(), Some("auth0|u1"));
        assert_eq!(listed[0].created_at, msg.created_at);
    }

    #[tokio::test]
    async fn test_list_recent_orders_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let repo = test_repo(&dir).await;

        let base = Utc::now();
        for i in 0..5 {
            repo.insert(&message_at(
                &format!("msg-{i}"),
                base + Duration::seconds(i),
            ))
            .await
            .unwrap();
        }

        let listed = repo.list_recent(50).await.unwrap();
        assert_eq!(listed.len(), 5);
        assert_eq!(listed[0].text, "msg-4");
        assert_eq!(listed[4].text, "msg-0");
        for window in listed.windows(2) {
            assert!(window[0].created_at >= window[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_list_recent_caps_at_limit() {
        let dir = tempfile::tempdir().unwrap();
        let repo = test_repo(&dir).await;

        let base = Utc::now();
        for i in 0..55 {
            repo.insert(&message_at(
                &format!("msg-{i}"),
                base + Duration::seconds(i),
            ))
            .await
            .unwrap();
        }

        let listed = repo.list_recent(50).await.unwrap();
        assert_eq!(listed.len(), 50);
        // The five oldest rows fall off
        assert_eq!(listed[0].text, "msg-54");
        assert_eq!(listed[49].text, "msg-5");
    }

    #[tokio::test]
    async fn test_clear_all_deletes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let repo = test_repo(&dir).await;

        for i in 0..3 {
            repo.insert(&Message::now(format!("msg-{i}"), None))
                .await
                .unwrap();
        }

        let deleted = repo.clear_all().await.unwrap();
        assert_eq!(deleted, 3);
        assert!(repo.list_recent(50).await.unwrap().is_empty());

        // Clearing an empty table is fine
        assert_eq!(repo.clear_all().await.unwrap(), 0);
    }
}
