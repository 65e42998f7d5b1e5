//! Interest repository port.
//!
//! Uniqueness of (user, session) is enforced by storage; `record` reports a
//! duplicate instead of failing so handlers can map it to a typed error.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::InterestedParticipant;

/// Outcome of recording interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestInsert {
    Inserted,
    Duplicate,
}

#[async_trait]
pub trait InterestRepository: Send + Sync {
    /// Insert the record unless one exists for the same (user, session).
    async fn record(&self, interest: &InterestedParticipant) -> Result<InterestInsert, DomainError>;

    async fn exists(&self, user_id: &UserId, session_id: &SessionId) -> Result<bool, DomainError>;

    /// Users interested in a session, oldest interest first.
    async fn list_user_ids(&self, session_id: &SessionId) -> Result<Vec<UserId>, DomainError>;
}
