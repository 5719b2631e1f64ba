use thiserror::Error;

/// Errors from the message router's input validation.
///
/// This is the only error the send path is allowed to propagate to callers;
/// everything downstream of validation degrades to fallback text instead.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message text must be between 1 and {max} characters, got {len}")]
    InvalidText { len: usize, max: usize },
}

/// Errors from the generative-language reply path.
///
/// Each variant maps to a fixed user-facing fallback string in
/// `banter-core::reply::fallback`. None of these escape the send path.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("no API key configured")]
    NotConfigured,

    #[error("upstream rejected the prompt (HTTP 400)")]
    BadRequest,

    #[error("upstream refused the API key (HTTP 403)")]
    Unauthorized,

    #[error("upstream error: HTTP {status}")]
    Upstream { status: u16 },

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Deserialization(String),

    #[error("completion contained no text")]
    EmptyCompletion,
}

/// Errors from repository operations (used by trait definitions in banter-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::InvalidText { len: 4001, max: 4000 };
        assert_eq!(
            err.to_string(),
            "message text must be between 1 and 4000 characters, got 4001"
        );
    }

    #[test]
    fn test_reply_error_display() {
        let err = ReplyError::Upstream { status: 503 };
        assert_eq!(err.to_string(), "upstream error: HTTP 503");
        assert_eq!(
            ReplyError::Unauthorized.to_string(),
            "upstream refused the API key (HTTP 403)"
        );
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
