//! MessageRepository trait definition.
//!
//! Provides insert/list/clear operations over the chat message log.
//! Implementations live in banter-infra (e.g., `SqliteMessageRepository`).

use banter_types::error::RepositoryError;
use banter_types::message::Message;

/// Repository trait for chat message persistence.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Messages are
/// append-only: there is no update operation by design.
pub trait MessageRepository: Send + Sync {
    /// Insert a single message row.
    fn insert(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Fetch up to `limit` of the most recent messages, ordered by
    /// `created_at` DESC.
    fn list_recent(
        &self,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Delete every message row. Returns the number of rows removed.
    fn clear_all(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
