//! Application state wiring the chat service together.
//!
//! AppState holds the concrete service instance used by both the CLI and
//! the HTTP API. The service is generic over store/provider traits; here it
//! is pinned to the SQLite repository and the Gemini client. Both
//! collaborators are optional: missing configuration degrades the
//! corresponding feature at startup instead of failing it.

use std::sync::Arc;

use tracing::{info, warn};

use banter_core::chat::ChatService;
use banter_infra::config;
use banter_infra::llm::gemini::GeminiClient;
use banter_infra::sqlite::message::SqliteMessageRepository;
use banter_infra::sqlite::pool::DatabasePool;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteMessageRepository, GeminiClient>;

/// Shared application state.
///
/// Used by CLI commands and HTTP handlers alike.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Initialize the application state: open the store and build the
    /// Gemini client when configured, then wire the chat service.
    ///
    /// Never fails. A missing database URL or API key logs one warning and
    /// leaves the corresponding collaborator absent; the service degrades
    /// per operation instead.
    pub async fn init() -> Self {
        let store = match config::database_url() {
            Some(url) => match DatabasePool::new(&url).await {
                Ok(pool) => {
                    info!("message store connected");
                    Some(SqliteMessageRepository::new(pool))
                }
                Err(err) => {
                    warn!(%err, "failed to open message store; chat will run without persistence");
                    None
                }
            },
            None => {
                warn!("BANTER_DATABASE_URL not set; chat will run without persistence");
                None
            }
        };

        let replier = match config::gemini_api_key() {
            Some(key) => Some(GeminiClient::new(key)),
            None => {
                warn!("GEMINI_API_KEY_TEXT not set; replies will report the missing configuration");
                None
            }
        };

        Self {
            chat_service: Arc::new(ChatService::new(store, replier)),
        }
    }
}
