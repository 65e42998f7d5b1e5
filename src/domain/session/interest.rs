//! Interested participant - a user's recorded interest in a session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{InterestId, SessionId, Timestamp, UserId};

/// Append-only record; unique per (user, session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestedParticipant {
    pub id: InterestId,
    pub user_id: UserId,
    pub session_id: SessionId,
    pub created_at: Timestamp,
}

impl InterestedParticipant {
    pub fn new(user_id: UserId, session_id: SessionId) -> Self {
        Self {
            id: InterestId::new(),
            user_id,
            session_id,
            created_at: Timestamp::now(),
        }
    }

    pub fn is_for(&self, user_id: &UserId, session_id: &SessionId) -> bool {
        &self.user_id == user_id && &self.session_id == session_id
    }
}
