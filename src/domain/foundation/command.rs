//! Per-request context handed to every command handler.

use uuid::Uuid;

use super::UserId;

/// Who is acting, plus the ids that tie emitted events back to the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    /// Acting user; every authorization check reads this.
    pub user_id: UserId,
    correlation_id: String,
    source: Option<&'static str>,
}

impl CommandMetadata {
    /// Metadata with a freshly generated correlation id.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: Uuid::new_v4().to_string(),
            source: None,
        }
    }

    /// Reuse an upstream id, e.g. the `x-request-id` header.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = id.into();
        self
    }

    /// Entry point that issued the command (`api`, `cli`).
    pub fn with_source(mut self, source: &'static str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn source(&self) -> Option<&'static str> {
        self.source
    }
}
