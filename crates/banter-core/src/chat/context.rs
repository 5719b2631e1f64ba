//! Per-request context consumed by the chat service.

/// Context produced once per incoming request.
///
/// Carries the authenticated user identifier. No authentication is wired in
/// today, so `user_id` is always `None`; the field exists so the persistence
/// schema and router signatures hold still when auth lands.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub user_id: Option<String>,
}

impl RequestContext {
    /// Context for an unauthenticated request.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
