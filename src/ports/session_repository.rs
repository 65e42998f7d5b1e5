//! Session repository port (write side).
//!
//! # Design
//!
//! - **Write-focused**: aggregate persistence plus the participant insert
//! - **Atomic limit check**: `add_participant` re-checks the cap in the same
//!   transaction as the insert, and `update` re-checks a new cap against the
//!   stored participants, so neither path can overshoot

use async_trait::async_trait;

use crate::domain::catalog::Stack;
use crate::domain::foundation::{DomainError, ProjectId, SessionId, UserId};
use crate::domain::session::Session;

/// Outcome of an atomic participant insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantInsert {
    Inserted,
    AlreadyPresent,
    /// The cap as stored when the insert was refused.
    LimitReached { limit: u32 },
}

/// Repository port for Session aggregate persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save a new session with its languages.
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Update session fields and languages. Participants are untouched;
    /// they only change through `add_participant`.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    /// - `ValidationFailed` (field `participant_limit`) if the new limit is
    ///   below the participants confirmed at write time
    async fn update(&self, session: &Session) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Sessions under a project, ordered by schedule.
    async fn find_by_project(&self, project_id: &ProjectId) -> Result<Vec<Session>, DomainError>;

    /// Candidate pool for session suggestions.
    async fn find_by_stack(&self, stack: Stack) -> Result<Vec<Session>, DomainError>;

    /// Add `user_id` to the confirmed participants, holding the session row
    /// for the duration of the limit check.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if session doesn't exist
    async fn add_participant(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<ParticipantInsert, DomainError>;

    /// Whether `user_id` is a confirmed participant.
    async fn is_participant(
        &self,
        session_id: &SessionId,
        user_id: &UserId,
    ) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}
